//! Algorithm runners.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use bigoh_core::{AlgorithmId, Result};

use crate::fragments;

/// Executes one identified algorithm on a problem of a given size.
///
/// The returned value is the algorithm's result. Timing code ignores it; it
/// only exists so the work cannot be optimized away.
pub trait AlgorithmRunner {
    /// Runs `id` on a problem of size `size`.
    fn run(&mut self, id: AlgorithmId, size: u64) -> Result<i64>;
}

impl<R: AlgorithmRunner + ?Sized> AlgorithmRunner for &mut R {
    fn run(&mut self, id: AlgorithmId, size: u64) -> Result<i64> {
        (**self).run(id, size)
    }
}

impl<R: AlgorithmRunner + ?Sized> AlgorithmRunner for Box<R> {
    fn run(&mut self, id: AlgorithmId, size: u64) -> Result<i64> {
        (**self).run(id, size)
    }
}

/// Runner over the six loop fragments in [`crate::fragments`].
///
/// Owns its random source. Each run draws a fresh increment so repeated
/// calls do comparable work without producing identical values.
///
/// # Example
///
/// ```
/// use bigoh_algorithms::{AlgorithmRunner, FragmentRunner};
/// use bigoh_core::AlgorithmId;
///
/// let mut a = FragmentRunner::with_seed(7);
/// let mut b = FragmentRunner::with_seed(7);
///
/// let x = a.run(AlgorithmId::Alg3, 50).unwrap();
/// let y = b.run(AlgorithmId::Alg3, 50).unwrap();
/// assert_eq!(x, y);
/// ```
#[derive(Debug, Clone)]
pub struct FragmentRunner {
    rng: StdRng,
    seed: Option<u64>,
}

impl FragmentRunner {
    /// Creates a runner seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Creates a runner with a fixed seed for reproducible results.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a seeded runner when `seed` is set, OS-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Returns the seed, if this runner was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for FragmentRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmRunner for FragmentRunner {
    fn run(&mut self, id: AlgorithmId, size: u64) -> Result<i64> {
        let step: i64 = self.rng.random_range(1..=9);
        trace!(algorithm = %id, size, step, "running fragment");

        let value = match id {
            AlgorithmId::Alg1 => fragments::linear(size, step),
            AlgorithmId::Alg2 => fragments::cubic(size, step),
            AlgorithmId::Alg3 => fragments::quadratic(size, step),
            AlgorithmId::Alg4 => fragments::triangular(size, step),
            AlgorithmId::Alg5 => fragments::quintic(size, step),
            AlgorithmId::Alg6 => fragments::sparse_quartic(size, step),
        };
        Ok(value)
    }
}
