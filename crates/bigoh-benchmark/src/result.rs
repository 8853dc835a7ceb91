//! Sweep result types.

use bigoh_core::AlgorithmId;

use crate::estimate::Estimate;

/// Aggregated estimates from one sweep.
///
/// # Example
///
/// ```
/// use bigoh_benchmark::{Estimate, SweepResult};
/// use bigoh_core::AlgorithmId;
/// use std::time::Duration;
///
/// let mut result = SweepResult::new("Lab", Some(42));
/// result.add_estimate(Estimate {
///     algorithm: AlgorithmId::Alg3,
///     n1: 1_000,
///     n2: 2_000,
///     t1: Duration::from_millis(10),
///     t2_actual: Duration::from_millis(50),
///     t2_estimate: Duration::from_millis(40),
///     error: -0.2,
/// });
///
/// assert_eq!(result.estimate_count(), 1);
/// assert!((result.mean_abs_error().unwrap() - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Sweep name.
    pub name: String,
    /// Seed of the runner's random source, if it was fixed.
    pub seed: Option<u64>,
    /// Estimates in the order they were taken.
    pub estimates: Vec<Estimate>,
}

impl SweepResult {
    /// Creates an empty sweep result.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            name: name.into(),
            seed,
            estimates: Vec::new(),
        }
    }

    /// Adds an estimate to the results.
    pub fn add_estimate(&mut self, estimate: Estimate) {
        self.estimates.push(estimate);
    }

    /// Returns the number of estimates.
    pub fn estimate_count(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Returns the estimate with the smallest absolute error.
    pub fn best(&self) -> Option<&Estimate> {
        self.estimates
            .iter()
            .min_by(|a, b| a.abs_error().total_cmp(&b.abs_error()))
    }

    /// Returns the estimate with the largest absolute error.
    pub fn worst(&self) -> Option<&Estimate> {
        self.estimates
            .iter()
            .max_by(|a, b| a.abs_error().total_cmp(&b.abs_error()))
    }

    /// Returns the mean absolute error, or `None` for an empty sweep.
    pub fn mean_abs_error(&self) -> Option<f64> {
        if self.estimates.is_empty() {
            return None;
        }
        let total: f64 = self.estimates.iter().map(Estimate::abs_error).sum();
        Some(total / self.estimates.len() as f64)
    }

    /// Returns the estimates taken for one algorithm.
    pub fn for_algorithm(&self, id: AlgorithmId) -> impl Iterator<Item = &Estimate> {
        self.estimates.iter().filter(move |e| e.algorithm == id)
    }
}
