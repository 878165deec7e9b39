//! Run configuration
//!
//! The benchmark is driven by environment variables, matching its use in
//! batch job scripts:
//!
//! - `MATRIX` (required): matrix file name, resolved inside `MATRIX_DIR`
//! - `MATRIX_DIR` (default `matrix`): directory holding matrix files
//! - `SPMV_MODE` (default `sequential`): `sequential` or `parallel`
//! - `SPMV_SEED`: fixed input-vector seed; absent means time-seeded
//! - `SPMV_CHUNK_ROWS`: rows per parallel chunk; absent means derived
//!   from the core count

use std::env;
use std::path::PathBuf;

use crate::bench::TRIAL_COUNT;
use crate::error::Error;
use crate::spmv::Strategy;
use crate::vector::SeedPolicy;

/// Everything a benchmark run needs to know before loading the matrix
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path of the Matrix Market file to benchmark
    pub matrix_path: PathBuf,
    /// Kernel strategy for warm-up and timed trials
    pub strategy: Strategy,
    /// Input-vector seeding policy
    pub seed: SeedPolicy,
    /// Number of timed trials
    pub trials: usize,
    /// Rows per parallel chunk; None picks a core-count-based default
    pub chunk_rows: Option<usize>,
}

impl RunConfig {
    /// Builds a configuration from the process environment
    ///
    /// A missing `MATRIX` variable is fatal ([`Error::Config`]); the other
    /// variables fall back to defaults when absent but must parse when
    /// present.
    pub fn from_env() -> Result<Self, Error> {
        let name = env::var("MATRIX")
            .map_err(|_| Error::Config("MATRIX environment variable is not set".to_string()))?;
        let dir = env::var("MATRIX_DIR").unwrap_or_else(|_| "matrix".to_string());

        let strategy = match env::var("SPMV_MODE") {
            Ok(mode) => mode.parse()?,
            Err(_) => Strategy::Sequential,
        };

        let seed = match env::var("SPMV_SEED") {
            Ok(raw) => SeedPolicy::Fixed(raw.parse().map_err(|_| {
                Error::Config(format!("SPMV_SEED must be an integer, got {:?}", raw))
            })?),
            Err(_) => SeedPolicy::FromTime,
        };

        let chunk_rows = match env::var("SPMV_CHUNK_ROWS") {
            Ok(raw) => Some(raw.parse().map_err(|_| {
                Error::Config(format!("SPMV_CHUNK_ROWS must be an integer, got {:?}", raw))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            matrix_path: PathBuf::from(dir).join(name),
            strategy,
            seed,
            trials: TRIAL_COUNT,
            chunk_rows,
        })
    }

    /// Resolves the parallel chunk size for a matrix with `n_rows` rows
    pub fn chunk_rows_for(&self, n_rows: usize) -> usize {
        match self.chunk_rows {
            Some(rows) => rows.max(1),
            None => default_chunk_rows(n_rows),
        }
    }
}

/// Static chunking default: a few chunks per core, so uneven rows still
/// balance without shrinking chunks into scheduling overhead
pub fn default_chunk_rows(n_rows: usize) -> usize {
    let n_threads = num_cpus::get().max(1);
    (n_rows / (n_threads * 4)).max(1)
}
