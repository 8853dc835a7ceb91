//! Repeated-minimum timing.

use std::time::Duration;

use bigoh_core::{AlgorithmId, Result};
use tracing::debug;

use crate::timer::Measure;

/// Number of samples taken per robust measurement.
pub const SAMPLE_COUNT: usize = 5;

/// Takes [`SAMPLE_COUNT`] sequential samples and keeps the smallest.
///
/// Noise from preemption, cache misses and allocator work only ever adds
/// time, so the minimum is the sample closest to the true cost. Samples
/// are taken strictly one after another; a failing sample aborts the whole
/// measurement and is not retried.
///
/// # Example
///
/// ```
/// use bigoh_algorithms::FragmentRunner;
/// use bigoh_benchmark::{RobustTimer, Timer, SAMPLE_COUNT};
/// use bigoh_core::AlgorithmId;
///
/// let mut timer = RobustTimer::new(Timer::new(FragmentRunner::with_seed(1)));
/// let samples = timer.samples(AlgorithmId::Alg3, 50).unwrap();
/// assert_eq!(samples.len(), SAMPLE_COUNT);
///
/// let best = timer.robust_measure(AlgorithmId::Alg3, 50).unwrap();
/// assert!(best.as_secs_f64() >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RobustTimer<M> {
    inner: M,
}

impl<M: Measure> RobustTimer<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Takes all samples for one (algorithm, size) pair, in order.
    pub fn samples(&mut self, id: AlgorithmId, size: u64) -> Result<[Duration; SAMPLE_COUNT]> {
        let mut samples = [Duration::ZERO; SAMPLE_COUNT];
        for slot in samples.iter_mut() {
            *slot = self.inner.measure(id, size)?;
        }
        Ok(samples)
    }

    /// Returns the minimum of [`SAMPLE_COUNT`] samples.
    pub fn robust_measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration> {
        let samples = self.samples(id, size)?;
        let best = samples.iter().copied().fold(Duration::MAX, Duration::min);
        let worst = samples.iter().copied().fold(Duration::ZERO, Duration::max);

        debug!(
            event = "robust_sample",
            algorithm = %id,
            size,
            best_us = best.as_micros() as u64,
            worst_us = worst.as_micros() as u64,
        );
        Ok(best)
    }

    /// Returns the wrapped measurement.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Returns the wrapped measurement mutably.
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Consumes the robust timer and returns the wrapped measurement.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Measure> Measure for RobustTimer<M> {
    fn measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration> {
        self.robust_measure(id, size)
    }
}
