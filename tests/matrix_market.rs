//! Loader contract tests for the Matrix Market reader

use std::io::Write;

use tempfile::NamedTempFile;

use spmv_bench::{matrix, Error, SparseMatrixCSR};

fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_read_triplets_basic() {
    let file = write_fixture(
        "%%MatrixMarket matrix coordinate real general\n\
         % generated fixture\n\
         3 3 4\n\
         1 1 2.0\n\
         2 2 3.0\n\
         3 3 1.0\n\
         1 2 5.0\n",
    );

    let (n_rows, n_cols, triplets) = matrix::read_triplets(file.path()).unwrap();

    assert_eq!(n_rows, 3);
    assert_eq!(n_cols, 3);
    assert_eq!(triplets.len(), 4);

    // File order preserved, indices converted to zero-based
    assert_eq!(triplets[0], matrix::Triplet::new(0, 0, 2.0));
    assert_eq!(triplets[3], matrix::Triplet::new(0, 1, 5.0));
}

#[test]
fn test_round_trip_multiply() {
    // Loading this file and multiplying by ones must give [7, 3, 1]:
    // row 1 holds 2.0 and 5.0, row 2 holds 3.0, row 3 holds 1.0.
    let file = write_fixture(
        "3 3 4\n\
         1 1 2.0\n\
         2 2 3.0\n\
         3 3 1.0\n\
         1 2 5.0\n",
    );

    let loaded = matrix::read_matrix(file.path()).unwrap();
    let x = vec![1.0, 1.0, 1.0];
    let mut y = vec![0.0; 3];
    spmv_bench::spmv_sequential(&loaded, &x, &mut y);

    assert_eq!(y, vec![7.0, 3.0, 1.0]);
}

#[test]
fn test_header_without_comments() {
    let file = write_fixture("2 2 1\n1 2 4.5\n");

    let (n_rows, n_cols, triplets) = matrix::read_triplets(file.path()).unwrap();

    assert_eq!((n_rows, n_cols), (2, 2));
    assert_eq!(triplets, vec![matrix::Triplet::new(0, 1, 4.5)]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = matrix::read_triplets("no/such/file.mtx").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_bad_header_is_format_error() {
    let file = write_fixture("three by three\n");
    assert!(matches!(
        matrix::read_triplets(file.path()),
        Err(Error::Format(_))
    ));

    let file = write_fixture("3 3\n");
    assert!(matches!(
        matrix::read_triplets(file.path()),
        Err(Error::Format(_))
    ));
}

#[test]
fn test_comment_only_file_is_format_error() {
    let file = write_fixture("% nothing here\n% still nothing\n");
    assert!(matches!(
        matrix::read_triplets(file.path()),
        Err(Error::Format(_))
    ));
}

#[test]
fn test_short_file_is_format_error() {
    let file = write_fixture("3 3 4\n1 1 2.0\n2 2 3.0\n");
    assert!(matches!(
        matrix::read_triplets(file.path()),
        Err(Error::Format(_))
    ));
}

#[test]
fn test_zero_index_is_format_error() {
    let file = write_fixture("2 2 1\n0 1 3.0\n");
    assert!(matches!(
        matrix::read_triplets(file.path()),
        Err(Error::Format(_))
    ));
}

#[test]
fn test_write_then_read_round_trip() {
    let original = SparseMatrixCSR::new(
        3,
        3,
        vec![0, 2, 3, 5],
        vec![0, 2, 1, 0, 2],
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
    );

    let file = NamedTempFile::new().unwrap();
    matrix::write_matrix(file.path(), &original).unwrap();
    let loaded = matrix::read_matrix(file.path()).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_blank_lines_between_entries_are_skipped() {
    let file = write_fixture("2 2 2\n1 1 1.0\n\n2 2 2.0\n");

    let (_, _, triplets) = matrix::read_triplets(file.path()).unwrap();
    assert_eq!(triplets.len(), 2);
}
