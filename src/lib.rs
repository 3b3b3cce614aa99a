//! Oxilzss: LZSS sliding-window compression with a bit-exact token stream.
//!
//! The crate provides:
//! - A bit-granular append/read buffer (`bits`)
//! - A greedy longest-match sliding-window search (`matcher`)
//! - The LZSS token format: config, length code, encoder, decoder (`lzss`)
//!
//! Redundant runs of bytes are replaced by back-references into a bounded
//! history window; everything else is stored as 9-bit literals. Match
//! lengths use a recursive length-prefix integer code, so the stream is
//! bit-packed with no alignment or framing; the exact bit length travels
//! with the [`BitStream`] value.
//!
//! # Quick Start
//!
//! ```
//! use oxilzss::{Config, decode, encode};
//!
//! let config = Config::default();
//! let stream = encode(b"abrababr atritigratri", &config);
//! let restored = decode(&stream, &config).unwrap();
//! assert_eq!(restored, b"abrababr atritigratri");
//! ```
//!
//! Producer and consumer must agree on the configuration: `window_size`
//! fixes the offset field width, which is the wire-compatibility invariant.

pub mod bits;
pub mod lzss;
pub mod matcher;

// Re-export the two-sided contract at the crate root.
pub use bits::{BitReader, BitStream, OutOfBits};
pub use lzss::{Config, ConfigError, DecodeError, Token, decode, encode};
