//! Benchmark harness
//!
//! Runs the kernel for a fixed number of trials on an immutable
//! (matrix, input) pair, timing each trial with `std::time::Instant` and
//! deriving throughput metrics per trial. A warm-up invocation runs before
//! the first timed trial so the measurements do not include cold caches or
//! thread-pool startup.

use std::mem;
use std::time::Instant;

use crate::matrix::SparseMatrixCSR;
use crate::spmv::Strategy;

/// Number of timed kernel invocations per run
pub const TRIAL_COUNT: usize = 12;

/// Measurements for one timed kernel invocation
///
/// `arithmetic_intensity` depends only on the matrix shape, so it is the
/// same in every trial of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialMetrics {
    /// Wall time of the invocation in milliseconds
    pub elapsed_ms: f64,
    /// Achieved floating-point throughput, GFLOP/s
    pub gflops: f64,
    /// Achieved memory bandwidth, GB/s
    pub bandwidth_gbs: f64,
    /// FLOPs per byte moved
    pub arithmetic_intensity: f64,
}

impl TrialMetrics {
    /// Renders the record as `elapsed_ms,gflops,bandwidth_gbs,arithmetic_intensity`
    /// with 7 fixed decimal digits
    pub fn csv_line(&self) -> String {
        format!(
            "{:.7},{:.7},{:.7},{:.7}",
            self.elapsed_ms, self.gflops, self.bandwidth_gbs, self.arithmetic_intensity
        )
    }
}

/// Floating-point operations per kernel invocation
///
/// Each nonzero contributes one multiply and one add.
pub fn flop_count(matrix: &SparseMatrixCSR<f64>) -> u64 {
    2 * matrix.nnz() as u64
}

/// Bytes touched per kernel invocation, counted once regardless of cache
/// residency
///
/// Nonzero storage (value plus two indices at their stored width), the
/// whole input vector, and the whole output vector.
pub fn bytes_touched(matrix: &SparseMatrixCSR<f64>) -> u64 {
    let per_nnz = mem::size_of::<f64>() + 2 * mem::size_of::<usize>();
    (matrix.nnz() * per_nnz + (matrix.n_cols + matrix.n_rows) * mem::size_of::<f64>()) as u64
}

/// Runs `trials` timed kernel invocations after one untimed warm-up
///
/// The warm-up uses the same strategy as the timed trials, so the first
/// measurement already sees a warmed thread pool and cache state. Returns
/// one record per trial in execution order; aggregation is left to the
/// caller.
pub fn run_benchmark(
    matrix: &SparseMatrixCSR<f64>,
    x: &[f64],
    strategy: Strategy,
    trials: usize,
    chunk_rows: usize,
) -> Vec<TrialMetrics> {
    let mut y = vec![0.0; matrix.n_rows];

    strategy.run(matrix, x, &mut y, chunk_rows);

    let flops = flop_count(matrix) as f64;
    let bytes = bytes_touched(matrix) as f64;
    let arithmetic_intensity = flops / bytes;

    let mut records = Vec::with_capacity(trials);
    for _ in 0..trials {
        let start = Instant::now();
        strategy.run(matrix, x, &mut y, chunk_rows);
        let elapsed_s = start.elapsed().as_secs_f64();

        records.push(TrialMetrics {
            elapsed_ms: elapsed_s * 1e3,
            gflops: flops / elapsed_s / 1e9,
            bandwidth_gbs: bytes / elapsed_s / 1e9,
            arithmetic_intensity,
        });
    }

    records
}
