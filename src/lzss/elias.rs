// Variable-length integer code for match lengths.
//
// Three-level recursive length-prefix scheme in the Elias family: the code
// for n carries the trailing bits of n (leading 1 implicit), prefixed by the
// trailing bits of n's bit-length (leading 1 implicit again), prefixed by a
// unary run encoding that field's own width. Code size grows with
// log(log(n)), so the common short match lengths stay cheap.
//
// Layout for n >= 2, with blen = bit_length(n) and clen = bit_length(blen):
//
//   1^(clen+2) 0 | low (clen-1) bits of blen | low (blen-1) bits of n
//
// n = 1 is the single bit `0`. Decode mirrors encode exactly; both sides
// work on integer bit-length/shift/mask, and the emitted bit sequence is
// pinned by the known-vector tests below.

use thiserror::Error;

use crate::bits::{BitReader, BitStream, OutOfBits};

/// Largest `clen` whose `blen` can still describe a value fitting in `u64`:
/// blen <= 64 implies bit_length(blen) <= 7.
const MAX_CLEN: u64 = 7;

/// Failed length-code read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthCodeError {
    /// The stream ended inside the code.
    #[error("length code truncated: {0}")]
    Truncated(#[from] OutOfBits),
    /// The code claims a value wider than 64 bits. Unreachable from a
    /// conforming encoder; only malformed streams get here.
    #[error("length code at bit {position} claims a {claimed_bits}-bit value")]
    Overflow { position: usize, claimed_bits: u64 },
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Append the code for `n` (>= 1) to `out`.
///
/// `encode(1)` is exactly one bit.
pub fn encode_into(n: u64, out: &mut BitStream) {
    debug_assert!(n >= 1, "length code is defined for n >= 1");
    if n == 1 {
        out.push_bit(false);
        return;
    }

    let blen = bit_length(n); // >= 2
    let clen = bit_length(blen as u64); // >= 2

    for _ in 0..clen + 2 {
        out.push_bit(true);
    }
    out.push_bit(false);
    out.push_uint(blen as u64 & !(1 << (clen - 1)), clen - 1);
    out.push_uint(n & !(1 << (blen - 1)), blen - 1);
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Read one length code from `reader`.
pub fn decode_from(reader: &mut BitReader<'_>) -> Result<u64, LengthCodeError> {
    let start = reader.position();

    let mut unary = 0u64;
    while reader.read_bit()? {
        unary += 1;
    }
    if unary <= 2 {
        return Ok(1);
    }

    let clen = unary - 2;
    if clen > MAX_CLEN {
        // The width field itself is clen bits, so the value would span at
        // least 2^(clen-1) bits. Saturate the shift; the claim is absurd
        // either way.
        return Err(LengthCodeError::Overflow {
            position: start,
            claimed_bits: 1 << (clen - 1).min(63),
        });
    }
    let blen = 1 << (clen - 1) | reader.read_uint(clen as u32 - 1)?;
    if blen > 64 {
        return Err(LengthCodeError::Overflow {
            position: start,
            claimed_bits: blen,
        });
    }
    if blen == 1 {
        // clen of 1 never leaves the encoder, but the mirror decode of it
        // is the value 1 (implicit leading bit, nothing further to read).
        return Ok(1);
    }
    Ok(1 << (blen - 1) | reader.read_uint(blen as u32 - 1)?)
}

#[inline]
fn bit_length(n: u64) -> u32 {
    64 - n.leading_zeros()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
