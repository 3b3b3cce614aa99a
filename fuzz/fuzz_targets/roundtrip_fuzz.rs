#![no_main]
use libfuzzer_sys::fuzz_target;
use oxilzss::{Config, decode, encode};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First two bytes steer the config, the rest is the input.
    let window_size = 1 + data[0] as usize * 11;
    let lookahead_cap = 2 + data[1] as usize;
    let input = &data[2..];

    let cfg = Config::new(window_size, lookahead_cap).unwrap();
    let stream = encode(input, &cfg);

    // Decode and verify roundtrip.
    let decoded = decode(&stream, &cfg).unwrap();
    assert_eq!(decoded, input);
});
