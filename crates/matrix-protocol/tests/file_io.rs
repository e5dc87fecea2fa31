// crates/matrix-protocol/tests/file_io.rs
use std::fs;
use std::path::PathBuf;

use matrix_protocol::binary_codec::CodecError;
use matrix_protocol::{load_matrix, load_vector, save_matrix, save_vector};

fn scratch(name: &str) -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    dir.push("matrix-protocol-file-io");
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir.push(name);
    dir
}

#[test]
fn save_then_load_matrix() {
    let path = scratch("two_by_three.bin");
    save_matrix(&path, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 40 + 6 * 8);

    let m = load_matrix(&path).unwrap();
    assert_eq!((m.rows(), m.cols()), (2, 3));
    assert_eq!(m.row(1), Some(&[4.0, 5.0, 6.0][..]));
}

#[test]
fn save_truncates_existing_file() {
    let path = scratch("truncate.bin");
    fs::write(&path, vec![0xFFu8; 500]).unwrap();

    save_matrix(&path, &[42.0], 1, 1).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 48);
    assert_eq!(load_matrix(&path).unwrap().as_slice(), &[42.0]);
}

#[test]
fn save_vector_then_load_vector() {
    let path = scratch("vector.bin");
    let values = [1.5, f64::NAN, 3.5];
    save_vector(&path, &values).unwrap();

    let v = load_vector(&path).unwrap();
    let got: Vec<u64> = v.as_slice().iter().map(|x| x.to_bits()).collect();
    let want: Vec<u64> = values.iter().map(|x| x.to_bits()).collect();
    assert_eq!(got, want);

    // the same file also decodes as an n x 1 matrix
    let m = load_matrix(&path).unwrap();
    assert_eq!((m.rows(), m.cols()), (3, 1));
}

#[test]
fn missing_source_is_reported() {
    let path = scratch("does-not-exist.bin");
    let _ = fs::remove_file(&path);

    let err = load_matrix(&path).unwrap_err();
    match err {
        CodecError::SourceNotFound { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected SourceNotFound, got {:?}", other),
    }

    assert!(matches!(
        load_vector(&path),
        Err(CodecError::SourceNotFound { .. })
    ));
}

#[test]
fn unwritable_destination_is_reported() {
    let path = scratch("no-such-dir").join("out.bin");

    let err = save_matrix(&path, &[1.0], 1, 1).unwrap_err();
    assert!(matches!(err, CodecError::DestinationUnavailable { .. }));
    assert!(err.to_string().contains("out.bin"));

    assert!(matches!(
        save_vector(&path, &[1.0]),
        Err(CodecError::DestinationUnavailable { .. })
    ));
}

#[test]
fn truncated_file_is_malformed() {
    let path = scratch("short.bin");
    save_matrix(&path, &[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 3);
    fs::write(&path, &bytes).unwrap();

    assert!(matches!(
        load_matrix(&path),
        Err(CodecError::MalformedPayload(_))
    ));
}
