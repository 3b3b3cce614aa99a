// LZSS encoder: byte sequence -> token bit stream.
//
// Pure and total: a valid `Config` and any finite input always encode, and
// the same input always produces the identical bit stream (the matcher's
// nearest-occurrence tie-break is deterministic).

use log::trace;

use super::Token;
use super::config::Config;
use super::elias;
use crate::bits::BitStream;
use crate::matcher;

/// Per-byte worst case: flag bit plus literal byte.
const LITERAL_BITS: usize = 9;

/// Encode `input` into an LZSS token stream.
///
/// The output must be decoded with an identical `Config`; `window_size`
/// fixes the offset field width for the whole stream.
pub fn encode(input: &[u8], config: &Config) -> BitStream {
    let mut out = BitStream::with_capacity(input.len() * LITERAL_BITS);

    let mut pos = 0;
    while pos < input.len() {
        let window_start = pos - pos.min(config.max_offset());
        let window = &input[window_start..pos];
        let lookahead = &input[pos..];

        let token = match matcher::find_longest_match(window, lookahead, config.lookahead_cap()) {
            Some(m) if m.length >= 2 => Token::Match {
                offset: m.offset,
                length: m.length,
            },
            _ => Token::Literal(input[pos]),
        };

        trace!("pos {pos}: {token:?} at bit {}", out.len());
        match token {
            Token::Match { offset, length } => {
                out.push_bit(true);
                out.push_uint(offset as u64, config.offset_bits());
                elias::encode_into(length as u64, &mut out);
                pos += length;
            }
            Token::Literal(byte) => {
                out.push_bit(false);
                out.push_uint(byte as u64, 8);
                pos += 1;
            }
        }
    }

    out
}
