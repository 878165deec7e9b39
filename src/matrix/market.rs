//! Matrix Market coordinate-format reader and writer
//!
//! Handles the subset of the format used by the SuiteSparse collection for
//! real general matrices: optional `%` comment lines, a `rows cols nnz`
//! header, then exactly `nnz` lines of one-based `row col value` triplets.
//! Indices are converted to zero-based on load.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Error;
use crate::matrix::SparseMatrixCSR;

/// One nonzero entry in coordinate form, zero-based
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

impl Triplet {
    pub fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }
}

/// Reads the declared dimensions and the unordered triplet list from a
/// Matrix Market coordinate file
///
/// Returns `(n_rows, n_cols, triplets)`. The triplet list is in file
/// order; sorting is the CSR builder's job. Fails with [`Error::Io`] if
/// the file cannot be opened or read, and [`Error::Format`] if the header
/// does not hold three integers or the file declares more entries than it
/// contains.
pub fn read_triplets<P: AsRef<Path>>(path: P) -> Result<(usize, usize, Vec<Triplet>), Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    // Skip comments and read header
    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line.map_err(|e| Error::io(path, e))?;
                if !line.starts_with('%') {
                    break line;
                }
            }
            None => return Err(Error::Format("missing header line".to_string())),
        }
    };

    let fields: Vec<usize> = header
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| Error::Format(format!("invalid header line {:?}", header)))?;
    if fields.len() != 3 {
        return Err(Error::Format(format!(
            "header must be `rows cols nnz`, got {:?}",
            header
        )));
    }
    let (n_rows, n_cols, nnz) = (fields[0], fields[1], fields[2]);

    let mut triplets = Vec::with_capacity(nnz);
    while triplets.len() < nnz {
        let line = match lines.next() {
            Some(line) => line.map_err(|e| Error::io(path, e))?,
            None => {
                return Err(Error::Format(format!(
                    "expected {} entries, file ends after {}",
                    nnz,
                    triplets.len()
                )))
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        triplets.push(parse_entry(&line)?);
    }

    Ok((n_rows, n_cols, triplets))
}

/// Reads a Matrix Market file straight into CSR form
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrixCSR<f64>, Error> {
    let (n_rows, n_cols, triplets) = read_triplets(path)?;
    SparseMatrixCSR::from_triplets(n_rows, n_cols, triplets)
}

/// Writes a CSR matrix in Matrix Market coordinate format, one-based
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrixCSR<f64>) -> Result<(), Error> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| Error::io(path, e))?;

    writeln!(file, "%%MatrixMarket matrix coordinate real general")
        .map_err(|e| Error::io(path, e))?;
    writeln!(file, "{} {} {}", matrix.n_rows, matrix.n_cols, matrix.nnz())
        .map_err(|e| Error::io(path, e))?;

    for i in 0..matrix.n_rows {
        for (col, value) in matrix.row_iter(i) {
            writeln!(file, "{} {} {}", i + 1, col + 1, value).map_err(|e| Error::io(path, e))?;
        }
    }

    Ok(())
}

/// Parses one `row col value` data line; indices are one-based in the file
fn parse_entry(line: &str) -> Result<Triplet, Error> {
    let mut fields = line.split_whitespace();
    let row: usize = fields
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::Format(format!("invalid row index in {:?}", line)))?;
    let col: usize = fields
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::Format(format!("invalid column index in {:?}", line)))?;
    let value: f64 = fields
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::Format(format!("invalid value in {:?}", line)))?;

    if row == 0 || col == 0 {
        return Err(Error::Format(format!(
            "indices are one-based, found zero in {:?}",
            line
        )));
    }

    Ok(Triplet::new(row - 1, col - 1, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_converts_to_zero_based() {
        let t = parse_entry("3 7 -2.5").unwrap();
        assert_eq!(t, Triplet::new(2, 6, -2.5));
    }

    #[test]
    fn test_parse_entry_rejects_zero_index() {
        assert!(matches!(parse_entry("0 1 1.0"), Err(Error::Format(_))));
        assert!(matches!(parse_entry("1 0 1.0"), Err(Error::Format(_))));
    }

    #[test]
    fn test_parse_entry_rejects_garbage() {
        assert!(matches!(parse_entry("1 two 3.0"), Err(Error::Format(_))));
        assert!(matches!(parse_entry("1 2"), Err(Error::Format(_))));
    }
}
