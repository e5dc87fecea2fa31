// crates/matrix-protocol/tests/csv_scenarios.rs
use matrix_core::{Matrix, Vector};
use matrix_protocol::csv_codec::{
    format_matrix_csv, format_vector_csv, parse_matrix_csv, parse_vector_csv, CsvError,
};
use matrix_protocol::{decode_matrix, encode};

const FIXTURE: &str = "\
# 2x3 fixture
1, 2.5, -3

4,NaN ,inf
";

#[test]
fn parses_rows_skipping_comments_and_blanks() {
    let m = parse_matrix_csv(FIXTURE).unwrap();
    assert_eq!((m.rows(), m.cols()), (2, 3));
    assert_eq!(m.row(0), Some(&[1.0, 2.5, -3.0][..]));
    assert!(m.get(1, 1).unwrap().is_nan());
    assert_eq!(m.get(1, 2), Some(f64::INFINITY));
}

#[test]
fn empty_text_is_empty_matrix() {
    assert_eq!(parse_matrix_csv("").unwrap(), Matrix::empty());
    assert_eq!(parse_matrix_csv("# nothing\n\n").unwrap(), Matrix::empty());
}

#[test]
fn reports_bad_token_position() {
    let err = parse_matrix_csv("1, 2\n3, x\n").unwrap_err();
    assert_eq!(
        err,
        CsvError::InvalidNumber {
            line: 2,
            column: 2,
            token: "x".to_string()
        }
    );
}

#[test]
fn reports_ragged_rows() {
    let err = parse_matrix_csv("# header\n1, 2\n3\n").unwrap_err();
    assert_eq!(
        err,
        CsvError::RaggedRow {
            line: 3,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn format_then_parse_is_exact() {
    let m = Matrix::from_rows(vec![
        vec![0.1, 1.0 / 3.0, -0.0],
        vec![1e300, f64::MIN_POSITIVE, 123456789.0],
    ])
    .unwrap();

    let text = format_matrix_csv(&m);
    assert_eq!(text.lines().count(), 2);
    assert!(parse_matrix_csv(&text).unwrap().bitwise_eq(&m));
}

#[test]
fn csv_to_blob_and_back() {
    let m = parse_matrix_csv("1, 2\n3, 4\n").unwrap();
    let blob = encode(&m).unwrap();
    assert_eq!(blob.len(), 56);

    let back = decode_matrix(&blob).unwrap();
    assert_eq!(format_matrix_csv(&back), "1, 2\n3, 4\n");
}

#[test]
fn vector_csv_round_trip() {
    let v = parse_vector_csv("1.5\n# skip\n2.5\n3.5\n").unwrap();
    assert_eq!(v, Vector::from(vec![1.5, 2.5, 3.5]));
    assert_eq!(format_vector_csv(&v), "1.5\n2.5\n3.5\n");
}

#[test]
fn vector_csv_rejects_multiple_columns() {
    let err = parse_vector_csv("1\n2, 3\n").unwrap_err();
    assert_eq!(err, CsvError::NotAColumn { line: 2, found: 2 });
}

#[test]
fn zero_column_matrix_formats_as_empty_text() {
    let m = Matrix::zeros(1_000_000, 0).unwrap();
    assert_eq!(format_matrix_csv(&m), "");
    assert_eq!(parse_matrix_csv(&format_matrix_csv(&m)).unwrap(), Matrix::empty());
}
