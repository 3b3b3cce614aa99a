use oxilzss::lzss::elias;
use oxilzss::{BitStream, Config, decode, encode};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = Config> {
    (1usize..=1024, 2usize..=64)
        .prop_map(|(window, lookahead)| Config::new(window, lookahead).unwrap())
}

/// Inputs biased toward repetition so match tokens actually occur.
fn arb_input() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        proptest::collection::vec(any::<u8>(), 0..2048),
        proptest::collection::vec(0u8..4, 0..2048),
        (proptest::collection::vec(any::<u8>(), 1..64), 1usize..64)
            .prop_map(|(unit, reps)| unit.repeat(reps)),
    ]
}

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(input in arb_input(), cfg in arb_config()) {
        let stream = encode(&input, &cfg);
        let decoded = decode(&stream, &cfg).unwrap();
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn prop_encoding_is_deterministic(input in arb_input(), cfg in arb_config()) {
        prop_assert_eq!(encode(&input, &cfg), encode(&input, &cfg));
    }

    #[test]
    fn prop_stream_length_is_bounded(input in arb_input(), cfg in arb_config()) {
        // Worst case is all-literals (9 bits per byte); best case is one
        // token per lookahead_cap bytes, and no token is shorter than
        // 9 bits.
        let stream = encode(&input, &cfg);
        let floor = input.len().div_ceil(cfg.lookahead_cap()) * 9;
        prop_assert!(stream.len() >= floor.min(input.len() * 9));
        prop_assert!(stream.len() <= input.len() * 9);
    }

    #[test]
    fn prop_length_code_roundtrip(n in 1u64..=(1 << 20)) {
        let mut bs = BitStream::new();
        elias::encode_into(n, &mut bs);
        let mut r = bs.reader();
        prop_assert_eq!(elias::decode_from(&mut r).unwrap(), n);
        prop_assert!(r.is_at_end());
    }

    #[test]
    fn prop_truncation_inside_final_token_is_detected(
        input in proptest::collection::vec(any::<u8>(), 1..512),
        cfg in arb_config(),
        dropped in 1usize..=8
    ) {
        // Tokens are at least 9 bits, so dropping up to 8 bits always cuts
        // into the final token.
        let mut stream = encode(&input, &cfg);
        let len = stream.len();
        stream.truncate(len - dropped);
        prop_assert!(decode(&stream, &cfg).is_err());
    }

    #[test]
    fn prop_random_bits_never_panic(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        trailing in 0usize..8,
        cfg in arb_config()
    ) {
        // Arbitrary bit soup: decode must either succeed or fail cleanly.
        let bit_len = (bytes.len() * 8).saturating_sub(trailing);
        if let Some(stream) = BitStream::from_bytes(&bytes, bit_len) {
            let _ = decode(&stream, &cfg);
        }
    }

    #[test]
    fn prop_length_claims_above_the_cap_are_rejected(
        excess in 1u64..=(1 << 40),
        lookahead in 2usize..=64
    ) {
        // However large the claim, the cap bounds every accepted match.
        let cfg = Config::new(256, lookahead).unwrap();
        let mut bs = BitStream::new();
        bs.push_bit(false);
        bs.push_uint(b'a' as u64, 8);
        bs.push_bit(true);
        bs.push_uint(1, cfg.offset_bits());
        elias::encode_into(cfg.lookahead_cap() as u64 + excess, &mut bs);
        let is_oversized = matches!(
            decode(&bs, &cfg).unwrap_err(),
            oxilzss::DecodeError::OversizedMatch { .. }
        );
        prop_assert!(is_oversized);
    }

    #[test]
    fn prop_forged_offsets_are_dangling_references(
        offset_excess in 1u64..1000,
        length in 2u64..100
    ) {
        // A match reaching back further than anything decoded must surface
        // as a dangling reference, never as out-of-bounds bytes.
        let cfg = Config::new(1 << 12, 64).unwrap();
        let mut bs = BitStream::new();
        bs.push_bit(false);
        bs.push_uint(0xAA, 8);
        bs.push_bit(true);
        let offset = 1 + offset_excess; // output holds exactly 1 byte
        bs.push_uint(offset, cfg.offset_bits());
        elias::encode_into(length, &mut bs);
        let err = decode(&bs, &cfg).unwrap_err();
        let is_dangling = matches!(err, oxilzss::DecodeError::DanglingReference { .. });
        prop_assert!(is_dangling);
    }
}
