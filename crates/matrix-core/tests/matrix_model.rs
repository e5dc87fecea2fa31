// crates/matrix-core/tests/matrix_model.rs
use matrix_core::{Matrix, MatrixError, Shape, Vector};

#[test]
fn new_accepts_matching_length() {
    let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.shape(), Shape::new(2, 3));
    assert_eq!(m.len(), 6);
    assert_eq!(m.get(1, 2), Some(6.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.get(0, 3), None);
    assert_eq!(m.row(1), Some(&[4.0, 5.0, 6.0][..]));
    assert_eq!(m.row(2), None);
}

#[test]
fn new_rejects_wrong_length() {
    let err = Matrix::new(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ShapeMismatch {
            rows: 2,
            cols: 2,
            len: 3
        }
    );
}

#[test]
fn new_rejects_overflowing_shape() {
    let err = Matrix::new(usize::MAX, 2, Vec::new()).unwrap_err();
    assert!(matches!(err, MatrixError::ShapeOverflow { .. }));
}

#[test]
fn from_rows_is_row_major() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.to_nested(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn from_rows_rejects_ragged_input() {
    let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn empty_matrix_has_zero_shape() {
    let m = Matrix::from_rows(Vec::new()).unwrap();
    assert_eq!(m, Matrix::empty());
    assert!(m.is_empty());
    assert_eq!(m.rows_iter().count(), 0);
}

#[test]
fn rows_iter_handles_zero_columns() {
    let m = Matrix::zeros(3, 0).unwrap();
    let rows: Vec<&[f64]> = m.rows_iter().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.is_empty()));
}

#[test]
fn bitwise_eq_treats_nan_as_equal_to_itself() {
    let a = Matrix::new(1, 2, vec![f64::NAN, 1.0]).unwrap();
    let b = a.clone();
    assert_ne!(a, b);
    assert!(a.bitwise_eq(&b));

    let pos = Matrix::new(1, 1, vec![0.0]).unwrap();
    let neg = Matrix::new(1, 1, vec![-0.0]).unwrap();
    assert_eq!(pos, neg);
    assert!(!pos.bitwise_eq(&neg));
}

#[test]
fn bitwise_eq_compares_shape() {
    let a = Matrix::new(2, 1, vec![1.0, 2.0]).unwrap();
    let b = Matrix::new(1, 2, vec![1.0, 2.0]).unwrap();
    assert!(!a.bitwise_eq(&b));
}

#[test]
fn vector_is_a_column() {
    let v = Vector::from(vec![1.5, 2.5, 3.5]);
    assert_eq!(v.len(), 3);

    let m = v.clone().into_matrix();
    assert_eq!(m.shape(), Shape::new(3, 1));
    assert_eq!(m.as_slice(), v.as_slice());
}

#[test]
fn shape_display_and_count() {
    let s = Shape::new(4, 5);
    assert_eq!(s.to_string(), "4x5");
    assert_eq!(s.element_count(), Some(20));
    assert_eq!(Shape::new(usize::MAX, 2).element_count(), None);
}
