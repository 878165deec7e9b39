//! # spmv-bench: sparse matrix–vector multiplication benchmark
//!
//! Measures SpMV latency, floating-point throughput, memory bandwidth, and
//! arithmetic intensity on matrices read from Matrix Market coordinate
//! files, over repeated timed trials.
//!
//! ## Pipeline
//!
//! 1. **Load**: parse the coordinate file into an unordered triplet list
//!    ([`matrix::market`]).
//! 2. **Build**: stable-sort by (row, col) and derive row offsets into a
//!    CSR structure ([`SparseMatrixCSR::from_triplets`]).
//! 3. **Initialize**: generate the dense input vector with a fixed or
//!    time-based seed ([`vector::random_vector`]).
//! 4. **Benchmark**: one warm-up multiply, then 12 timed trials with the
//!    selected kernel strategy ([`bench::run_benchmark`]).
//!
//! ## Kernel strategies
//!
//! [`Strategy::Sequential`] walks the rows on one thread;
//! [`Strategy::Parallel`] partitions the output vector into disjoint
//! contiguous row chunks across a Rayon fork-join pool. Both accumulate
//! each row in column-ascending storage order, so the two strategies
//! produce bit-identical results.
//!
//! ## Usage
//!
//! ```
//! use spmv_bench::{random_vector, run_benchmark, SeedPolicy, SparseMatrixCSR, Strategy, Triplet};
//!
//! let triplets = vec![
//!     Triplet::new(0, 0, 2.0),
//!     Triplet::new(0, 1, 5.0),
//!     Triplet::new(1, 1, 3.0),
//! ];
//! let matrix = SparseMatrixCSR::from_triplets(2, 2, triplets).unwrap();
//! let x = random_vector(matrix.n_cols, SeedPolicy::Fixed(42));
//!
//! let trials = run_benchmark(&matrix, &x, Strategy::Sequential, 12, 1);
//! assert_eq!(trials.len(), 12);
//! ```

pub mod bench;
pub mod config;
pub mod error;
pub mod matrix;
pub mod spmv;
pub mod utils;
pub mod vector;

// Re-export primary components
pub use bench::{bytes_touched, flop_count, run_benchmark, TrialMetrics, TRIAL_COUNT};
pub use config::RunConfig;
pub use error::Error;
pub use matrix::{read_matrix, read_triplets, write_matrix, SparseMatrixCSR, Triplet};
pub use spmv::{spmv_parallel, spmv_sequential, Strategy};
pub use utils::to_sprs_csr;
pub use vector::{random_vector, SeedPolicy};

/// Version information for the spmv-bench library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
