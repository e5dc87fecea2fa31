//! Column vector: the `n × 1` special case of [`Matrix`].

use crate::matrix::{bits_eq, Matrix};

/// A sequence of `f64` values, treated as an `n × 1` matrix on the wire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector(Vec<f64>);

impl Vector {
    pub fn new(values: Vec<f64>) -> Self {
        Vector(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// View as an `n × 1` matrix.
    pub fn into_matrix(self) -> Matrix {
        Matrix::column(self.0)
    }

    /// Same length and every value identical by bit pattern.
    pub fn bitwise_eq(&self, other: &Vector) -> bool {
        bits_eq(&self.0, &other.0)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Vector(values)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}
