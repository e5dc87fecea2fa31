//! Dense row-major matrix of `f64`.
//!
//! Values are stored flat: all columns of row 0, then all columns of
//! row 1, and so on. That is also the order the binary codec writes
//! them in, so encoding is a straight copy of [`Matrix::as_slice`].

use crate::error::MatrixError;
use crate::shape::Shape;

/// A `rows × cols` matrix of 64-bit floats.
///
/// Invariant: `data.len() == rows * cols`. Every constructor checks it,
/// and there is no way to resize the buffer afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from row-major `data`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::ShapeOverflow { rows, cols })?;

        if data.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }

        Ok(Matrix { rows, cols, data })
    }

    /// A `rows × cols` matrix filled with `0.0`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::ShapeOverflow { rows, cols })?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// An `n × 1` column from `data`.
    pub(crate) fn column(data: Vec<f64>) -> Self {
        Matrix {
            rows: data.len(),
            cols: 1,
            data,
        }
    }

    /// The 0×0 matrix.
    pub fn empty() -> Self {
        Matrix::default()
    }

    /// Build a matrix from nested rows.
    ///
    /// All rows must have the same length. An empty outer vector
    /// yields the 0×0 matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);

        let mut data = Vec::with_capacity(n_rows.saturating_mul(n_cols));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of stored values (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of all values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Slice of one row, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    /// Iterate over rows in order.
    ///
    /// Yields exactly `rows` slices, including when `cols == 0`.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| {
            let start = r * self.cols;
            &self.data[start..start + self.cols]
        })
    }

    /// Copy out as nested rows.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(<[f64]>::to_vec).collect()
    }

    /// Same shape and every value identical by bit pattern.
    ///
    /// Unlike `==`, a NaN equals itself here, and `0.0` differs from `-0.0`.
    pub fn bitwise_eq(&self, other: &Matrix) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && bits_eq(&self.data, &other.data)
    }
}

pub(crate) fn bits_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}
