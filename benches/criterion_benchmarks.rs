use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxilzss::{Config, decode, encode};

/// Deterministic byte soup with tunable redundancy: `period` bounds the
/// alphabet span so the matcher actually finds back-references.
fn gen_data(size: usize, period: u64, seed: u64) -> Vec<u8> {
    let mut s = seed;
    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        out.push(((s >> 33) % period) as u8);
    }
    out
}

fn bench_encoding_speed(c: &mut Criterion) {
    let cfg = Config::default();
    let mut g = c.benchmark_group("encoding_speed");
    for size in [4 * 1024usize, 32 * 1024, 256 * 1024] {
        let input = gen_data(size, 8, 1);
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let stream = encode(black_box(&input), &cfg);
                black_box(stream);
            });
        });
    }
    g.finish();
}

fn bench_decoding_speed(c: &mut Criterion) {
    let cfg = Config::default();
    let mut g = c.benchmark_group("decoding_speed_vs_stream");
    for size in [4 * 1024usize, 32 * 1024, 256 * 1024] {
        let input = gen_data(size, 8, 2);
        let stream = encode(&input, &cfg);
        g.throughput(Throughput::Bytes((stream.len() / 8) as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let out = decode(black_box(&stream), &cfg).unwrap();
                black_box(out);
            });
        });
    }
    g.finish();
}

fn bench_window_size(c: &mut Criterion) {
    let mut g = c.benchmark_group("encoding_vs_window_size");
    let input = gen_data(32 * 1024, 16, 3);
    for window in [64usize, 256, 1024, 4096] {
        let cfg = Config::new(window, 32).unwrap();
        g.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, _| {
            b.iter(|| {
                let stream = encode(black_box(&input), &cfg);
                black_box(stream);
            });
        });
    }
    g.finish();
}

fn bench_incompressible_worst_case(c: &mut Criterion) {
    // Full-range bytes defeat the matcher almost everywhere, so this is
    // dominated by failed window scans.
    let cfg = Config::default();
    let input = gen_data(32 * 1024, 256, 4);
    c.bench_function("encoding_incompressible_32k", |b| {
        b.iter(|| {
            let stream = encode(black_box(&input), &cfg);
            black_box(stream);
        });
    });
}

criterion_group!(
    benches,
    bench_encoding_speed,
    bench_decoding_speed,
    bench_window_size,
    bench_incompressible_worst_case
);
criterion_main!(benches);
