//! Single-sample wall-clock timer.

use std::hint::black_box;
use std::time::{Duration, Instant};

use bigoh_algorithms::AlgorithmRunner;
use bigoh_core::{AlgorithmId, Result};
use tracing::trace;

use crate::settle::{NoSettle, SettleHint};

/// Something that can time one run of an algorithm.
///
/// [`Timer`] is the real implementation. Tests substitute scripted
/// measurements to drive [`crate::RobustTimer`] deterministically.
pub trait Measure {
    /// Times one run of `id` on a problem of size `size`.
    fn measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration>;
}

impl<M: Measure + ?Sized> Measure for &mut M {
    fn measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration> {
        (**self).measure(id, size)
    }
}

/// Zero-erasure wall-clock timer.
///
/// Wraps a runner and a settle hint as concrete type parameters.
///
/// # Type Parameters
///
/// * `R` - The algorithm runner
/// * `H` - The settle hint invoked before the clock starts
///
/// # Example
///
/// ```
/// use bigoh_algorithms::FragmentRunner;
/// use bigoh_benchmark::{Measure, Timer};
/// use bigoh_core::AlgorithmId;
///
/// let mut timer = Timer::new(FragmentRunner::with_seed(1));
/// let elapsed = timer.measure(AlgorithmId::Alg1, 1_000).unwrap();
/// assert!(elapsed.as_secs_f64() >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Timer<R, H = NoSettle> {
    runner: R,
    settle: H,
}

impl<R: AlgorithmRunner> Timer<R> {
    /// Creates a timer without a settle hint.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            settle: NoSettle,
        }
    }
}

impl<R: AlgorithmRunner, H: SettleHint> Timer<R, H> {
    /// Creates a timer that invokes `settle` before every sample.
    pub fn with_settle(runner: R, settle: H) -> Self {
        Self { runner, settle }
    }

    /// Returns the runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Returns the runner mutably.
    pub fn runner_mut(&mut self) -> &mut R {
        &mut self.runner
    }

    /// Consumes the timer and returns the runner.
    pub fn into_runner(self) -> R {
        self.runner
    }
}

impl<R: AlgorithmRunner, H: SettleHint> Measure for Timer<R, H> {
    fn measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration> {
        self.settle.settle();

        let start = Instant::now();
        let value = self.runner.run(id, size)?;
        let elapsed = start.elapsed();
        black_box(value);

        trace!(
            event = "sample",
            algorithm = %id,
            size,
            elapsed_us = elapsed.as_micros() as u64,
        );
        Ok(elapsed)
    }
}
