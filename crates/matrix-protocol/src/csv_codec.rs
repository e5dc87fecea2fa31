//! CSV compatibility codec.
//!
//! Plain-text interchange for tools and fixtures, alongside the binary
//! blob format.
//!
//! Matrix format (one row per line):
//!
//! ```text
//! # comment lines and blank lines are ignored
//! 1, 2.5, -3
//! 4, NaN, inf
//! ```
//!
//! Vector format (one value per line):
//!
//! ```text
//! 1.5
//! 2.5
//! ```
//!
//! Values are written with Rust's shortest round-trip float formatting,
//! so `parse(format(m))` reproduces every value exactly, except that
//! NaN payload bits collapse to the canonical NaN. A matrix with zero
//! columns formats as empty text and parses back as 0×0.

use thiserror::Error;

use matrix_core::{Matrix, MatrixError, Vector};

/// Errors raised while parsing CSV text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// A token is not a valid `f64`.
    #[error("line {line}, column {column}: invalid number {token:?}")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },

    /// A row has a different number of values than the first row.
    #[error("line {line}: {found} values, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Vector input had more than one value on a line.
    #[error("line {line}: expected a single value, got {found}")]
    NotAColumn { line: usize, found: usize },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Parse CSV text into a matrix.
///
/// Empty input (or only comments) yields the 0×0 matrix.
pub fn parse_matrix_csv(text: &str) -> Result<Matrix, CsvError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line_no, tokens) in data_lines(text) {
        let row = parse_row(line_no, &tokens)?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(CsvError::RaggedRow {
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    Ok(Matrix::from_rows(rows)?)
}

/// Parse CSV text with one value per line into a vector.
pub fn parse_vector_csv(text: &str) -> Result<Vector, CsvError> {
    let mut values = Vec::new();

    for (line_no, tokens) in data_lines(text) {
        if tokens.len() != 1 {
            return Err(CsvError::NotAColumn {
                line: line_no,
                found: tokens.len(),
            });
        }
        values.extend(parse_row(line_no, &tokens)?);
    }

    Ok(Vector::new(values))
}

/// Format a matrix as CSV, one row per line.
///
/// Zero-column matrices yield empty text whatever their row count; a
/// decoded header may declare up to `i64::MAX` empty rows.
pub fn format_matrix_csv(matrix: &Matrix) -> String {
    let mut out = String::new();
    if matrix.cols() == 0 {
        return out;
    }
    for row in matrix.rows_iter() {
        let line: Vec<String> = row.iter().map(f64::to_string).collect();
        out.push_str(&line.join(", "));
        out.push('\n');
    }
    out
}

/// Format a vector as CSV, one value per line.
pub fn format_vector_csv(vector: &Vector) -> String {
    let mut out = String::new();
    for v in vector.as_slice() {
        out.push_str(&v.to_string());
        out.push('\n');
    }
    out
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Non-blank, non-comment lines with 1-based line numbers, split on commas.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, raw)| {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some((i + 1, split_and_trim(trimmed, ',')))
    })
}

fn parse_row(line: usize, tokens: &[&str]) -> Result<Vec<f64>, CsvError> {
    tokens
        .iter()
        .enumerate()
        .map(|(col, tok)| {
            tok.parse::<f64>().map_err(|_| CsvError::InvalidNumber {
                line,
                column: col + 1,
                token: tok.to_string(),
            })
        })
        .collect()
}

fn split_and_trim(s: &str, delimiter: char) -> Vec<&str> {
    s.split(delimiter).map(str::trim).collect()
}
