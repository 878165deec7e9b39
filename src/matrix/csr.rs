//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;

use num_traits::Num;

use crate::error::Error;
use crate::matrix::market::Triplet;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Within each row, entries are stored in column-ascending order. The SpMV
/// kernel sums each row in storage order, so this ordering also fixes the
/// floating-point rounding of the result.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        // Check that column indices are within bounds
        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a non-zero element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        let row_ptr = vec![0; n_rows + 1];
        let col_idx = Vec::new();
        let values = Vec::new();

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }
}

impl SparseMatrixCSR<f64> {
    /// Builds a CSR matrix from an unordered coordinate triplet list
    ///
    /// Triplets are stable-sorted by (row, col), so duplicate coordinates
    /// keep their input order and both entries are retained — each
    /// contributes to the row sum during SpMV. `row_ptr` is derived by a
    /// linear scan over the sorted list; rows with no entries (including
    /// trailing rows past the last occupied one) get repeated offsets.
    ///
    /// Returns [`Error::Format`] if any triplet's indices fall outside the
    /// declared `n_rows` × `n_cols` shape.
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        mut triplets: Vec<Triplet>,
    ) -> Result<Self, Error> {
        for t in &triplets {
            if t.row >= n_rows {
                return Err(Error::Format(format!(
                    "row index {} out of range for {} rows",
                    t.row + 1,
                    n_rows
                )));
            }
            if t.col >= n_cols {
                return Err(Error::Format(format!(
                    "column index {} out of range for {} columns",
                    t.col + 1,
                    n_cols
                )));
            }
        }

        // Stable sort: row is the primary key, column the secondary one.
        triplets.sort_by(|a, b| a.row.cmp(&b.row).then(a.col.cmp(&b.col)));

        let mut row_ptr = Vec::with_capacity(n_rows + 1);
        row_ptr.push(0);

        let mut k = 0;
        for row in 0..n_rows {
            while k < triplets.len() && triplets[k].row == row {
                k += 1;
            }
            row_ptr.push(k);
        }

        let mut col_idx = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());
        for t in triplets {
            col_idx.push(t.col);
            values.push(t.value);
        }

        Ok(Self::new(n_rows, n_cols, row_ptr, col_idx, values))
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
