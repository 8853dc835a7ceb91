//! Cross-size extrapolation against measured timings.

use std::time::Duration;

use bigoh_core::{model, AlgorithmId, BigOhError, GrowthFunction, Result};
use tracing::info;

use crate::robust::RobustTimer;
use crate::timer::Measure;

/// Outcome of one estimate: two robust measurements, the model's
/// prediction for the second size, and the relative error of that prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Algorithm that was timed.
    pub algorithm: AlgorithmId,
    /// Size the prediction starts from.
    pub n1: u64,
    /// Size being predicted.
    pub n2: u64,
    /// Robust timing at `n1`.
    pub t1: Duration,
    /// Robust timing at `n2`.
    pub t2_actual: Duration,
    /// Model prediction for `n2`, extrapolated from `t1`.
    pub t2_estimate: Duration,
    /// `(t2_estimate - t2_actual) / t2_actual`.
    pub error: f64,
}

impl Estimate {
    /// Returns the growth function used for the prediction.
    pub fn growth(&self) -> GrowthFunction {
        self.algorithm.growth()
    }

    /// Returns the magnitude of the relative error.
    pub fn abs_error(&self) -> f64 {
        self.error.abs()
    }

    /// Returns `true` if the model overestimated the second timing.
    pub fn is_overestimate(&self) -> bool {
        self.error > 0.0
    }
}

/// Runs the measure-extrapolate-compare pipeline.
///
/// # Example
///
/// ```
/// use bigoh_algorithms::FragmentRunner;
/// use bigoh_benchmark::{Estimator, Timer};
/// use bigoh_core::AlgorithmId;
///
/// let mut estimator = Estimator::new(Timer::new(FragmentRunner::with_seed(1)));
/// let estimate = estimator.estimate(AlgorithmId::Alg1, 200_000, 400_000);
/// // Very fast runs may time as zero on a coarse clock.
/// if let Ok(estimate) = estimate {
///     assert_eq!(estimate.n2, 400_000);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Estimator<M> {
    timer: RobustTimer<M>,
}

impl<M: Measure> Estimator<M> {
    /// Creates an estimator that samples through `measure`.
    pub fn new(measure: M) -> Self {
        Self {
            timer: RobustTimer::new(measure),
        }
    }

    /// Measures `id` at `n1` and `n2`, predicts `n2` from `n1`, and compares.
    ///
    /// # Errors
    ///
    /// Propagates measurement failures. Returns
    /// [`BigOhError::ZeroProblemSize`] for `n1 == 0` without running anything, and
    /// [`BigOhError::ZeroReferenceTiming`] when `n2` measures as zero.
    pub fn estimate(&mut self, id: AlgorithmId, n1: u64, n2: u64) -> Result<Estimate> {
        // Reject before timing; n2 may be expensive.
        if n1 == 0 {
            return Err(BigOhError::ZeroProblemSize);
        }
        let t1 = self.timer.robust_measure(id, n1)?;
        let t2_actual = self.timer.robust_measure(id, n2)?;

        let predicted = model::extrapolate(id, n1, t1.as_secs_f64(), n2)?;
        let error = model::percent_error(t2_actual.as_secs_f64(), predicted)?;
        let t2_estimate =
            Duration::try_from_secs_f64(predicted).map_err(|_| BigOhError::InvalidTiming(predicted))?;

        info!(
            event = "estimate",
            algorithm = %id,
            growth = %id.growth(),
            n1,
            n2,
            t1_ms = t1.as_secs_f64() * 1000.0,
            t2_actual_ms = t2_actual.as_secs_f64() * 1000.0,
            t2_estimate_ms = predicted * 1000.0,
            error,
        );

        Ok(Estimate {
            algorithm: id,
            n1,
            n2,
            t1,
            t2_actual,
            t2_estimate,
            error,
        })
    }

    /// Returns only the relative error of [`Estimator::estimate`].
    pub fn compute_percent_error(&mut self, id: AlgorithmId, n1: u64, n2: u64) -> Result<f64> {
        Ok(self.estimate(id, n1, n2)?.error)
    }

    /// Returns the robust timer.
    pub fn timer_mut(&mut self) -> &mut RobustTimer<M> {
        &mut self.timer
    }

    /// Consumes the estimator and returns the underlying measurement.
    pub fn into_inner(self) -> M {
        self.timer.into_inner()
    }
}
