// LZSS token-stream format.
//
// Every token starts with a one-bit flag:
//
//   flag:1
//     flag == 1 (match):   offset : ceil(log2(window_size)) bits, unsigned
//                          length : variable-length code (`elias`)
//     flag == 0 (literal): byte   : 8 bits, unsigned
//
// There is no magic number, version tag, or end marker; the stream's exact
// bit length travels with the `BitStream` value itself.
//
// # Modules
//
// - `config`  — window/lookahead validation and derived field widths
// - `elias`   — variable-length integer code for match lengths
// - `encoder` — byte sequence -> bit stream
// - `decoder` — bit stream -> byte sequence, with malformed-stream errors

pub mod config;
pub mod decoder;
pub mod elias;
pub mod encoder;

pub use config::{Config, ConfigError};
pub use decoder::{DecodeError, decode};
pub use encoder::encode;

/// One emitted unit of the stream. Transient: tokens are serialized the
/// moment they are formed and reconstructed only implicitly during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A byte stored verbatim.
    Literal(u8),
    /// Copy `length` bytes starting `offset` bytes behind the cursor.
    /// Invariants: `1 <= offset <= window_size`, `length >= 2`. A
    /// length-1 candidate always degrades to a literal, whose 9 bits
    /// undercut any match token.
    Match { offset: usize, length: usize },
}
