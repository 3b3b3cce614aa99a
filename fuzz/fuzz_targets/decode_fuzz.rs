#![no_main]
use libfuzzer_sys::fuzz_target;
use oxilzss::{BitStream, Config, decode};

fuzz_target!(|data: &[u8]| {
    // Fuzz the decoder with arbitrary bits under varying configs.
    // The decoder must never panic — only return errors.
    if data.len() < 3 {
        return;
    }
    let window_size = 1 + data[0] as usize * 17;
    let lookahead_cap = 2 + data[1] as usize;
    let trailing = (data[2] % 8) as usize;
    let payload = &data[3..];

    let cfg = Config::new(window_size, lookahead_cap).unwrap();
    let bit_len = (payload.len() * 8).saturating_sub(trailing);
    if let Some(stream) = BitStream::from_bytes(payload, bit_len) {
        let _ = decode(&stream, &cfg);
    }
});
