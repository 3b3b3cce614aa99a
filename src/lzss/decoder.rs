// LZSS decoder: token bit stream -> byte sequence.
//
// Single pass. The output buffer being built is also the dictionary that
// match tokens copy from, so matches are resolved byte-by-byte in
// increasing order: a length greater than its offset legitimately re-reads
// bytes appended earlier in the same copy.
//
// Decoding fails fast on the first malformed token; there is no partial
// output. Retrying cannot help (the transform is deterministic), so every
// error carries the bit position needed to diagnose the corruption instead.

use log::trace;
use thiserror::Error;

use super::config::Config;
use super::elias::{self, LengthCodeError};
use crate::bits::{BitStream, OutOfBits};

/// Malformed-stream failure, fatal to the decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A bit-field read extended past the available bits.
    #[error("truncated stream: {0}")]
    Truncated(#[from] OutOfBits),
    /// A match token reached back past the start of the output. Offset 0 is
    /// classified here too: no conforming encoder emits it.
    #[error(
        "dangling back-reference at bit {bit_pos}: offset {offset} with only {output_len} byte(s) decoded"
    )]
    DanglingReference {
        bit_pos: usize,
        offset: usize,
        output_len: usize,
    },
    /// A length code claimed a value wider than 64 bits.
    #[error("oversized length code at bit {bit_pos}: claims a {claimed_bits}-bit value")]
    LengthOverflow { bit_pos: usize, claimed_bits: u64 },
    /// A match token claimed a length above the lookahead cap. No
    /// conforming encoder emits one; the cap bounds every copy the decoder
    /// will perform.
    #[error("oversized match at bit {bit_pos}: length {length} exceeds the lookahead cap {cap}")]
    OversizedMatch {
        bit_pos: usize,
        length: u64,
        cap: usize,
    },
}

impl From<LengthCodeError> for DecodeError {
    fn from(e: LengthCodeError) -> Self {
        match e {
            LengthCodeError::Truncated(inner) => Self::Truncated(inner),
            LengthCodeError::Overflow {
                position,
                claimed_bits,
            } => Self::LengthOverflow {
                bit_pos: position,
                claimed_bits,
            },
        }
    }
}

/// Decode an LZSS token stream produced with the same `Config`.
///
/// The loop terminates exactly when no unread bits remain; the stream's own
/// bit length is the only framing there is.
pub fn decode(stream: &BitStream, config: &Config) -> Result<Vec<u8>, DecodeError> {
    let mut reader = stream.reader();
    let mut output = Vec::new();

    while !reader.is_at_end() {
        let token_pos = reader.position();
        if reader.read_bit()? {
            let offset = reader.read_uint(config.offset_bits())? as usize;
            let length = elias::decode_from(&mut reader)?;
            if offset == 0 || offset > output.len() {
                return Err(DecodeError::DanglingReference {
                    bit_pos: token_pos,
                    offset,
                    output_len: output.len(),
                });
            }
            if length > config.lookahead_cap() as u64 {
                return Err(DecodeError::OversizedMatch {
                    bit_pos: token_pos,
                    length,
                    cap: config.lookahead_cap(),
                });
            }
            let length = length as usize;
            trace!("bit {token_pos}: match offset {offset} length {length}");
            let start = output.len() - offset;
            for i in 0..length {
                let byte = output[start + i];
                output.push(byte);
            }
        } else {
            let byte = reader.read_uint(8)? as u8;
            trace!("bit {token_pos}: literal {byte:#04x}");
            output.push(byte);
        }
    }

    Ok(output)
}
