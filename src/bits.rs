// Bit-granular append/read buffer.
//
// `BitStream` is the value both sides of the codec exchange: the encoder
// appends bits to it, the decoder walks it with a `BitReader` cursor.
// Bits are packed MSB-first within each backing byte and multi-bit fields
// are big-endian. No padding or alignment is ever inserted between fields,
// so the stream's bit length is exactly the sum of the bits appended.
//
// The token format carries no length or termination marker; the exact bit
// count lives in `BitStream` itself and travels out of band (see
// `as_bytes` / `from_bytes`).

use thiserror::Error;

/// A read that ran past the end of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit read past end of stream: need {requested} bit(s) at bit {position}, {available} left")]
pub struct OutOfBits {
    /// Cursor position (in bits) where the read started.
    pub position: usize,
    /// Bits the read asked for.
    pub requested: usize,
    /// Bits that were actually left.
    pub available: usize,
}

// ---------------------------------------------------------------------------
// BitStream
// ---------------------------------------------------------------------------

/// Growable bit vector with append, indexed get/set, and cursor reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for roughly `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Rebuild a stream from its packed bytes and exact bit length.
    ///
    /// Inverse of [`as_bytes`](Self::as_bytes) + [`len`](Self::len). The bit
    /// length must be carried alongside the bytes because the final byte is
    /// zero-padded; `bit_len` outside `bytes.len() * 8` (or a short last
    /// byte) is rejected.
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Option<Self> {
        if bit_len > bytes.len() * 8 || bytes.len() * 8 >= bit_len + 8 {
            return None;
        }
        let mut bytes = bytes.to_vec();
        // Normalize padding so streams compare bitwise regardless of origin.
        if bit_len % 8 != 0 {
            let last = bytes.len() - 1;
            bytes[last] &= !(0xFFu8 >> (bit_len % 8));
        }
        Some(Self {
            bytes,
            len: bit_len,
        })
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed backing bytes; the last byte is zero-padded below `len` bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most-significant first.
    ///
    /// `width` may be 0 (appends nothing). `value` must fit in `width` bits.
    pub fn push_uint(&mut self, value: u64, width: u32) {
        debug_assert!(width <= 64);
        debug_assert!(width == 64 || value < 1u64 << width, "value {value} does not fit {width} bits");
        for shift in (0..width).rev() {
            self.push_bit(value >> shift & 1 == 1);
        }
    }

    /// Append every bit of `other`, in order.
    pub fn extend(&mut self, other: &BitStream) {
        for i in 0..other.len {
            self.push_bit(other.bytes[i / 8] & (0x80 >> (i % 8)) != 0);
        }
    }

    /// Bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Overwrite the bit at `index`. Returns `false` if out of range.
    pub fn set(&mut self, index: usize, bit: bool) -> bool {
        if index >= self.len {
            return false;
        }
        let mask = 0x80 >> (index % 8);
        if bit {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }
        true
    }

    /// Shorten the stream to `bit_len` bits. No-op if already shorter.
    pub fn truncate(&mut self, bit_len: usize) {
        if bit_len >= self.len {
            return;
        }
        self.len = bit_len;
        self.bytes.truncate(bit_len.div_ceil(8));
        // Clear the dropped tail of the last byte so equality stays bitwise.
        if bit_len % 8 != 0 {
            let last = self.bytes.len() - 1;
            self.bytes[last] &= !(0xFFu8 >> (bit_len % 8));
        }
    }

    /// Sequential read cursor starting at bit 0.
    pub fn reader(&self) -> BitReader<'_> {
        BitReader {
            stream: self,
            pos: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// BitReader
// ---------------------------------------------------------------------------

/// Sequential read cursor over a [`BitStream`].
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    stream: &'a BitStream,
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Cursor position in bits.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unread bits left in the stream.
    pub fn remaining(&self) -> usize {
        self.stream.len - self.pos
    }

    /// True once every bit has been consumed. Drives the decode loop.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.stream.len
    }

    /// Read one bit, advancing the cursor.
    pub fn read_bit(&mut self) -> Result<bool, OutOfBits> {
        match self.stream.get(self.pos) {
            Some(bit) => {
                self.pos += 1;
                Ok(bit)
            }
            None => Err(OutOfBits {
                position: self.pos,
                requested: 1,
                available: 0,
            }),
        }
    }

    /// Read a `width`-bit big-endian unsigned integer, advancing the cursor.
    ///
    /// Fails without consuming anything if fewer than `width` bits remain.
    pub fn read_uint(&mut self, width: u32) -> Result<u64, OutOfBits> {
        debug_assert!(width <= 64);
        let width = width as usize;
        if self.remaining() < width {
            return Err(OutOfBits {
                position: self.pos,
                requested: width,
                available: self.remaining(),
            });
        }
        let mut value = 0u64;
        for _ in 0..width {
            let bit = self.stream.get(self.pos).unwrap_or(false);
            value = value << 1 | bit as u64;
            self.pos += 1;
        }
        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
