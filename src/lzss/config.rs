// Encode/decode configuration.
//
// `window_size` pins the fixed offset-field width for the whole stream,
// which makes it the wire-compatibility invariant: producer and consumer
// must be built with the identical value or decoding is undefined.

use thiserror::Error;

/// Default history window (256 bytes, an 8-bit offset field).
pub const DEFAULT_WINDOW_SIZE: usize = 256;

/// Default lookahead cap (32 bytes).
pub const DEFAULT_LOOKAHEAD_CAP: usize = 32;

/// Rejected configuration, detected before any encode/decode runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("window_size must be at least 1, got {0}")]
    WindowTooSmall(usize),
    #[error("lookahead_cap must be at least 2, got {0}")]
    LookaheadTooSmall(usize),
}

/// Validated compressor configuration with derived field widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    window_size: usize,
    lookahead_cap: usize,
    offset_bits: u32,
    max_offset: usize,
}

impl Config {
    /// Validate and derive the stream constants.
    ///
    /// `window_size` must be >= 1 and `lookahead_cap` >= 2 (a cap of 1 could
    /// never produce a match token, since matches start at length 2).
    pub fn new(window_size: usize, lookahead_cap: usize) -> Result<Self, ConfigError> {
        if window_size < 1 {
            return Err(ConfigError::WindowTooSmall(window_size));
        }
        if lookahead_cap < 2 {
            return Err(ConfigError::LookaheadTooSmall(lookahead_cap));
        }
        let offset_bits = ceil_log2(window_size);
        // Offsets are stored verbatim in `offset_bits` bits, so the deepest
        // reachable match is capped at the largest representable value. Only
        // a power-of-two window loses its single deepest slot to this.
        let max_offset = window_size.min((1usize << offset_bits) - 1);
        Ok(Self {
            window_size,
            lookahead_cap,
            offset_bits,
            max_offset,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn lookahead_cap(&self) -> usize {
        self.lookahead_cap
    }

    /// Fixed width of every offset field in the stream:
    /// `ceil(log2(window_size))`.
    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Largest offset the fixed-width field can carry.
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            lookahead_cap: DEFAULT_LOOKAHEAD_CAP,
            offset_bits: 8,
            max_offset: 255,
        }
    }
}

fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}
