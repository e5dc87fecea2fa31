//! Low-level wire types and constants.
//!
//! This module defines:
//! - The gonum magic word and header geometry.
//! - The 5-word `Header` and its little-endian (de)serialization.
//! - `Malformed`, the reasons a blob fails layout validation.
//!
//! The actual encode/decode logic lives in `binary_codec`.

use bytes::{Buf, BufMut};
use thiserror::Error;

use matrix_core::Shape;

/// Magic word tagging a gonum dense-matrix blob.
///
/// Little-endian bytes are `01 00 00 00 47 46 41 00`: a `u32` version 1
/// followed by `"GFA\0"`. Must be preserved verbatim for compatibility.
pub const MAGIC: i64 = 18_373_144_242_814_977;

/// Size of one header word and of one payload element.
pub const WORD_SIZE: usize = 8;

/// Number of 64-bit words in the header: magic, rows, cols, two reserved.
pub const HEADER_WORDS: usize = 5;

/// Header size in bytes. The payload starts at this offset.
pub const HEADER_LEN: usize = HEADER_WORDS * WORD_SIZE;

/// Reasons a byte buffer does not follow the blob layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// Fewer than `HEADER_LEN` bytes.
    #[error("blob is {len} bytes, shorter than the 40-byte header")]
    TruncatedHeader { len: usize },

    /// Payload length is not a whole number of 8-byte words.
    #[error("payload of {payload_len} bytes is not a multiple of 8")]
    PartialWord { payload_len: usize },

    /// Payload holds a different number of values than the header declares.
    #[error("header declares {rows}x{cols} but payload holds {found} values")]
    ElementCountMismatch { rows: i64, cols: i64, found: usize },

    /// Header declares a negative dimension.
    #[error("header declares negative shape {rows}x{cols}")]
    NegativeDimension { rows: i64, cols: i64 },

    /// Header shape does not fit in the address space.
    #[error("header shape {rows}x{cols} is too large")]
    DimensionOverflow { rows: i64, cols: i64 },
}

/// The fixed 40-byte blob header, viewed as five signed 64-bit integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    pub magic: i64,
    pub rows: i64,
    pub cols: i64,
    pub reserved: [i64; 2],
}

impl Header {
    /// Header for a fresh blob of the given shape.
    pub fn for_shape(rows: i64, cols: i64) -> Self {
        Header {
            magic: MAGIC,
            rows,
            cols,
            reserved: [0, 0],
        }
    }

    /// Append the five header words, little-endian.
    pub fn write_to<B: BufMut>(&self, out: &mut B) {
        out.put_i64_le(self.magic);
        out.put_i64_le(self.rows);
        out.put_i64_le(self.cols);
        out.put_i64_le(self.reserved[0]);
        out.put_i64_le(self.reserved[1]);
    }

    /// Read the first `HEADER_LEN` bytes of `buf` as a header.
    ///
    /// Only the length is checked here; the words are taken as-is.
    pub fn parse(buf: &[u8]) -> Result<Self, Malformed> {
        if buf.len() < HEADER_LEN {
            return Err(Malformed::TruncatedHeader { len: buf.len() });
        }

        let mut words = &buf[..HEADER_LEN];
        let magic = words.get_i64_le();
        let rows = words.get_i64_le();
        let cols = words.get_i64_le();
        let reserved = [words.get_i64_le(), words.get_i64_le()];

        Ok(Header {
            magic,
            rows,
            cols,
            reserved,
        })
    }

    /// First word equals [`MAGIC`].
    pub fn has_known_magic(&self) -> bool {
        self.magic == MAGIC
    }

    /// Declared shape, rejecting negative dimensions.
    pub fn shape(&self) -> Result<Shape, Malformed> {
        let (rows, cols) = (self.rows, self.cols);
        if rows < 0 || cols < 0 {
            return Err(Malformed::NegativeDimension { rows, cols });
        }

        let r = usize::try_from(rows).map_err(|_| Malformed::DimensionOverflow { rows, cols })?;
        let c = usize::try_from(cols).map_err(|_| Malformed::DimensionOverflow { rows, cols })?;
        Ok(Shape::new(r, c))
    }
}

/// Total blob size for a `rows × cols` matrix: `40 + rows*cols*8`.
///
/// `None` if the size overflows `usize`.
pub fn blob_len(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)?
        .checked_mul(WORD_SIZE)?
        .checked_add(HEADER_LEN)
}
