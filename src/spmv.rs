//! Sparse matrix–vector multiplication kernels
//!
//! Two interchangeable strategies compute `y[i] = Σ values[k] * x[col_idx[k]]`
//! over each row's entries: a single-threaded loop and a Rayon row-parallel
//! version. Both sum each row in storage (column-ascending) order, so their
//! outputs are bit-identical.

use std::ops::AddAssign;
use std::str::FromStr;

use num_traits::Num;
use rayon::prelude::*;

use crate::error::Error;
use crate::matrix::SparseMatrixCSR;

/// Kernel execution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl Strategy {
    /// Runs one multiply with this strategy, overwriting `y`
    ///
    /// `chunk_rows` is the parallel scheduling granularity; the sequential
    /// path ignores it.
    pub fn run<T>(self, matrix: &SparseMatrixCSR<T>, x: &[T], y: &mut [T], chunk_rows: usize)
    where
        T: Copy + Num + AddAssign + Send + Sync,
    {
        match self {
            Strategy::Sequential => spmv_sequential(matrix, x, y),
            Strategy::Parallel => spmv_parallel(matrix, x, y, chunk_rows),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "sequential" => Ok(Strategy::Sequential),
            "parallel" => Ok(Strategy::Parallel),
            other => Err(Error::Config(format!(
                "unknown mode {:?}, expected \"sequential\" or \"parallel\"",
                other
            ))),
        }
    }
}

/// Accumulates one row in storage order
#[inline]
fn row_sum<T>(matrix: &SparseMatrixCSR<T>, x: &[T], row: usize) -> T
where
    T: Copy + Num + AddAssign,
{
    let mut sum = T::zero();
    for k in matrix.row_ptr[row]..matrix.row_ptr[row + 1] {
        sum += matrix.values[k] * x[matrix.col_idx[k]];
    }
    sum
}

/// Sequential SpMV: rows processed in increasing index order
///
/// # Panics
///
/// Panics if `x.len() != matrix.n_cols` or `y.len() != matrix.n_rows`.
pub fn spmv_sequential<T>(matrix: &SparseMatrixCSR<T>, x: &[T], y: &mut [T])
where
    T: Copy + Num + AddAssign,
{
    assert_eq!(x.len(), matrix.n_cols, "input length must match n_cols");
    assert_eq!(y.len(), matrix.n_rows, "output length must match n_rows");

    for (row, slot) in y.iter_mut().enumerate() {
        *slot = row_sum(matrix, x, row);
    }
}

/// Row-parallel SpMV over a Rayon fork-join region
///
/// The output vector is split with `par_chunks_mut`, so every worker owns
/// a disjoint contiguous run of `chunk_rows` output slots; no two workers
/// can write the same element, and the matrix and input are only read.
/// The pool forks and joins inside this call — no worker outlives it.
///
/// # Panics
///
/// Panics if `x.len() != matrix.n_cols` or `y.len() != matrix.n_rows`.
pub fn spmv_parallel<T>(matrix: &SparseMatrixCSR<T>, x: &[T], y: &mut [T], chunk_rows: usize)
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    assert_eq!(x.len(), matrix.n_cols, "input length must match n_cols");
    assert_eq!(y.len(), matrix.n_rows, "output length must match n_rows");

    let chunk_rows = chunk_rows.max(1);
    y.par_chunks_mut(chunk_rows)
        .enumerate()
        .for_each(|(chunk, out)| {
            let first_row = chunk * chunk_rows;
            for (offset, slot) in out.iter_mut().enumerate() {
                *slot = row_sum(matrix, x, first_row + offset);
            }
        });
}
