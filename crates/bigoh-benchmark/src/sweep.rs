//! Sweeps over algorithms and size pairs.

use bigoh_core::{AlgorithmId, Result};
use tracing::info;

use crate::estimate::Estimator;
use crate::result::SweepResult;
use crate::timer::Measure;

/// One (algorithm, n1, n2) point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepCase {
    pub algorithm: AlgorithmId,
    pub n1: u64,
    pub n2: u64,
}

impl SweepCase {
    pub fn new(algorithm: AlgorithmId, n1: u64, n2: u64) -> Self {
        Self { algorithm, n1, n2 }
    }
}

/// Builder for a batch of estimates.
///
/// # Example
///
/// ```
/// use bigoh_benchmark::Sweep;
/// use bigoh_core::AlgorithmId;
///
/// let sweep = Sweep::new("Quadratics")
///     .with_case(AlgorithmId::Alg3, 500, 1_000)
///     .with_pairs(&[AlgorithmId::Alg4], &[(500, 1_000), (1_000, 2_000)])
///     .with_seed(42);
///
/// assert_eq!(sweep.name(), "Quadratics");
/// assert_eq!(sweep.cases().len(), 3);
/// assert_eq!(sweep.seed(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct Sweep {
    name: String,
    seed: Option<u64>,
    cases: Vec<SweepCase>,
}

impl Sweep {
    /// Creates an empty sweep with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: None,
            cases: Vec::new(),
        }
    }

    /// Creates a sweep with one doubling case per algorithm.
    ///
    /// Sizes are chosen so each fragment runs for a few milliseconds to
    /// tenths of a second on a typical machine.
    pub fn standard(name: impl Into<String>) -> Self {
        Self::new(name)
            .with_case(AlgorithmId::Alg1, 1_000_000, 2_000_000)
            .with_case(AlgorithmId::Alg2, 200, 400)
            .with_case(AlgorithmId::Alg3, 2_000, 4_000)
            .with_case(AlgorithmId::Alg4, 2_000, 4_000)
            .with_case(AlgorithmId::Alg5, 30, 60)
            .with_case(AlgorithmId::Alg6, 60, 120)
    }

    /// Adds a single case.
    pub fn with_case(mut self, algorithm: AlgorithmId, n1: u64, n2: u64) -> Self {
        self.cases.push(SweepCase::new(algorithm, n1, n2));
        self
    }

    /// Adds cases.
    pub fn with_cases(mut self, cases: impl IntoIterator<Item = SweepCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    /// Adds every combination of `algorithms` and `pairs`, algorithm-major.
    pub fn with_pairs(mut self, algorithms: &[AlgorithmId], pairs: &[(u64, u64)]) -> Self {
        for &algorithm in algorithms {
            for &(n1, n2) in pairs {
                self.cases.push(SweepCase::new(algorithm, n1, n2));
            }
        }
        self
    }

    /// Records the seed of the runner used for this sweep.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the sweep name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the recorded seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the cases in run order.
    pub fn cases(&self) -> &[SweepCase] {
        &self.cases
    }

    /// Runs every case in order and collects the estimates.
    ///
    /// Stops at the first failing case.
    pub fn run<M: Measure>(&self, estimator: &mut Estimator<M>) -> Result<SweepResult> {
        info!(
            event = "sweep_start",
            name = %self.name,
            case_count = self.cases.len() as u64,
        );

        let mut result = SweepResult::new(&self.name, self.seed);
        for case in &self.cases {
            let estimate = estimator.estimate(case.algorithm, case.n1, case.n2)?;
            result.add_estimate(estimate);
        }

        info!(
            event = "sweep_end",
            name = %self.name,
            case_count = result.estimate_count() as u64,
            mean_abs_error = result.mean_abs_error().unwrap_or(0.0),
        );
        Ok(result)
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::standard("Sweep")
    }
}
