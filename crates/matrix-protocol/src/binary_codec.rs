//! Binary encoding/decoding of dense matrices.
//!
//! This module converts between:
//! - raw blobs (`&[u8]`, files, or any `Read`/`Write`)
//! - `matrix_core::Matrix` / `Vector`
//!
//! Blob layout (gonum `Dense.MarshalBinary` compatible):
//!
//! ```text
//! [0..8]    magic    (i64 LE, MAGIC)
//! [8..16]   rows     (i64 LE)
//! [16..24]  cols     (i64 LE)
//! [24..32]  reserved (i64 LE, 0)
//! [32..40]  reserved (i64 LE, 0)
//! [40..]    payload  (rows*cols f64 LE, row-major)
//! ```
//!
//! Every call is a single pass over one buffer or one file handle.
//! Nothing is cached between calls and nothing is logged; errors go
//! straight back to the caller.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use bytes::{Buf, BufMut};
use thiserror::Error;

use matrix_core::{Matrix, MatrixError, Vector};

use crate::wire_types::{blob_len, Header, Malformed, HEADER_LEN, WORD_SIZE};

/// Errors that can arise when encoding/decoding a blob.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Output file could not be created or truncated.
    #[error("cannot open {} for writing", .path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file does not exist or could not be opened.
    #[error("cannot open {} for reading", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bytes do not follow the header/payload layout.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] Malformed),

    /// A dimension does not fit in the header's signed 64-bit slot.
    #[error("dimension {rows}x{cols} does not fit in an i64 header word")]
    DimensionTooLarge { rows: usize, cols: usize },

    /// Decoded values could not form a matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Read or write failed on an already-open stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

// ============================================================================
// In-memory blobs
// ============================================================================

/// Encode `values` as a `rows × cols` blob.
///
/// The caller is trusted: `values.len()` is not checked against
/// `rows * cols`. A mismatch produces a blob whose header lies about
/// its payload, and it is `decode_matrix` that rejects it.
pub fn encode_matrix(values: &[f64], rows: usize, cols: usize) -> Result<Vec<u8>, CodecError> {
    let capacity = blob_len(values.len(), 1).unwrap_or(HEADER_LEN);
    let mut out = Vec::with_capacity(capacity);
    encode_matrix_into(values, rows, cols, &mut out)?;
    Ok(out)
}

/// Like [`encode_matrix`], appending the blob to `out`.
pub fn encode_matrix_into<B: BufMut>(
    values: &[f64],
    rows: usize,
    cols: usize,
    out: &mut B,
) -> Result<(), CodecError> {
    let too_large = || CodecError::DimensionTooLarge { rows, cols };
    let header = Header::for_shape(
        i64::try_from(rows).map_err(|_| too_large())?,
        i64::try_from(cols).map_err(|_| too_large())?,
    );

    header.write_to(out);
    for &v in values {
        out.put_f64_le(v);
    }

    Ok(())
}

/// Encode a validated [`Matrix`].
pub fn encode(matrix: &Matrix) -> Result<Vec<u8>, CodecError> {
    encode_matrix(matrix.as_slice(), matrix.rows(), matrix.cols())
}

/// Decode a blob into a matrix of the shape its header declares.
///
/// The magic word is not checked; use [`read_header`] to inspect it.
pub fn decode_matrix(blob: &[u8]) -> Result<Matrix, CodecError> {
    let header = Header::parse(blob)?;
    let payload = payload_of(blob)?;
    let found = payload.len() / WORD_SIZE;

    let shape = header.shape()?;
    let expected = shape.element_count().ok_or(Malformed::DimensionOverflow {
        rows: header.rows,
        cols: header.cols,
    })?;

    if found != expected {
        return Err(Malformed::ElementCountMismatch {
            rows: header.rows,
            cols: header.cols,
            found,
        }
        .into());
    }

    let matrix = Matrix::new(shape.rows, shape.cols, read_values(payload))?;
    Ok(matrix)
}

/// Parse only the 40-byte header.
pub fn read_header(blob: &[u8]) -> Result<Header, CodecError> {
    Ok(Header::parse(blob)?)
}

/// Encode a vector as an `n × 1` blob.
pub fn encode_vector(values: &[f64]) -> Result<Vec<u8>, CodecError> {
    encode_matrix(values, values.len(), 1)
}

/// Decode a blob as a flat vector of length `rows`.
///
/// The payload must hold exactly `rows` values. The column count in the
/// header is not consulted.
pub fn decode_vector(blob: &[u8]) -> Result<Vector, CodecError> {
    let header = Header::parse(blob)?;
    let payload = payload_of(blob)?;
    let found = payload.len() / WORD_SIZE;

    let (rows, cols) = (header.rows, header.cols);
    if rows < 0 {
        return Err(Malformed::NegativeDimension { rows, cols }.into());
    }
    if usize::try_from(rows).ok() != Some(found) {
        return Err(Malformed::ElementCountMismatch { rows, cols, found }.into());
    }

    Ok(Vector::new(read_values(payload)))
}

// ============================================================================
// Streams
// ============================================================================

/// Write `matrix` as a blob to `writer`.
pub fn write_matrix<W: Write>(mut writer: W, matrix: &Matrix) -> Result<(), CodecError> {
    let blob = encode(matrix)?;
    writer.write_all(&blob)?;
    writer.flush()?;
    Ok(())
}

/// Read a whole blob from `reader` and decode it as a matrix.
pub fn read_matrix<R: Read>(mut reader: R) -> Result<Matrix, CodecError> {
    let mut blob = Vec::new();
    reader.read_to_end(&mut blob)?;
    decode_matrix(&blob)
}

/// Write `vector` as an `n × 1` blob to `writer`.
pub fn write_vector<W: Write>(mut writer: W, vector: &Vector) -> Result<(), CodecError> {
    let blob = encode_vector(vector.as_slice())?;
    writer.write_all(&blob)?;
    writer.flush()?;
    Ok(())
}

/// Read a whole blob from `reader` and decode it as a vector.
pub fn read_vector<R: Read>(mut reader: R) -> Result<Vector, CodecError> {
    let mut blob = Vec::new();
    reader.read_to_end(&mut blob)?;
    decode_vector(&blob)
}

// ============================================================================
// Files
// ============================================================================

/// Encode `values` as a `rows × cols` blob and write it to `path`.
///
/// An existing file is truncated. Nothing is created if encoding fails.
pub fn save_matrix<P: AsRef<Path>>(
    path: P,
    values: &[f64],
    rows: usize,
    cols: usize,
) -> Result<(), CodecError> {
    let blob = encode_matrix(values, rows, cols)?;
    write_file(path.as_ref(), &blob)
}

/// Read and decode the matrix blob at `path`.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix, CodecError> {
    let blob = read_file(path.as_ref())?;
    decode_matrix(&blob)
}

/// Encode `values` as an `n × 1` blob and write it to `path`.
pub fn save_vector<P: AsRef<Path>>(path: P, values: &[f64]) -> Result<(), CodecError> {
    let blob = encode_vector(values)?;
    write_file(path.as_ref(), &blob)
}

/// Read and decode the vector blob at `path`.
pub fn load_vector<P: AsRef<Path>>(path: P) -> Result<Vector, CodecError> {
    let blob = read_file(path.as_ref())?;
    decode_vector(&blob)
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Bytes after the header, checked to be whole 8-byte words.
fn payload_of(blob: &[u8]) -> Result<&[u8], Malformed> {
    let payload = blob.get(HEADER_LEN..).unwrap_or_default();
    if payload.len() % WORD_SIZE != 0 {
        return Err(Malformed::PartialWord {
            payload_len: payload.len(),
        });
    }
    Ok(payload)
}

/// Little-endian f64 words, bit patterns untouched.
fn read_values(mut payload: &[u8]) -> Vec<f64> {
    let mut values = Vec::with_capacity(payload.len() / WORD_SIZE);
    while payload.remaining() >= WORD_SIZE {
        values.push(payload.get_f64_le());
    }
    values
}

fn write_file(path: &Path, blob: &[u8]) -> Result<(), CodecError> {
    let mut file = File::create(path).map_err(|source| CodecError::DestinationUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(blob)?;
    file.flush()?;
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, CodecError> {
    let mut file = File::open(path).map_err(|source| CodecError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut blob = Vec::new();
    file.read_to_end(&mut blob)?;
    Ok(blob)
}
