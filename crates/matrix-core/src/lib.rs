//! matrix-core
//!
//! Pure matrix data model:
//! - shape (rows × cols)
//! - dense row-major `f64` matrix
//! - column vector alias
//! - construction errors

pub mod shape;
pub mod matrix;
pub mod vector;
pub mod error;

pub use shape::Shape;
pub use matrix::Matrix;
pub use vector::Vector;
pub use error::MatrixError;
