//! Error types for the matrix data model.
//!
//! Only construction can fail: once a `Matrix` exists its
//! `rows * cols == data.len()` invariant holds, so accessors
//! return `Option` instead of errors.

use thiserror::Error;

/// Errors raised while building a [`Matrix`](crate::Matrix).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The number of values does not match `rows * cols`.
    #[error("shape {rows}x{cols} does not match {len} values")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// A nested row has a different length than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// `rows * cols` does not fit in `usize`.
    #[error("shape {rows}x{cols} overflows the address space")]
    ShapeOverflow { rows: usize, cols: usize },
}
