//! Input vector generation
//!
//! The benchmark multiplies against a dense vector of uniform pseudorandom
//! values in [-1000, 1000]. The generator is an owned, explicitly seeded
//! instance rather than process-global state, so tests stay deterministic
//! and the seeding policy is a plain configuration value.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// How the input-vector generator is seeded
///
/// `Fixed` makes runs reproducible and cross-run comparable; `FromTime`
/// draws the seed from the wall clock, giving each run distinct cache and
/// branch patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    Fixed(u64),
    FromTime,
}

impl SeedPolicy {
    fn seed(self) -> u64 {
        match self {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::FromTime => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0),
        }
    }
}

/// Generates `len` uniform values in [-1000, 1000] under the given policy
pub fn random_vector(len: usize, policy: SeedPolicy) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(policy.seed());
    let range = Uniform::new_inclusive(-1000.0, 1000.0);

    (0..len).map(|_| range.sample(&mut rng)).collect()
}
