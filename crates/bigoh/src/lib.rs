//! BigOh - empirical timing and growth-rate estimation in Rust
//!
//! Times algorithm runs, predicts how the time grows with problem size,
//! and reports how wrong the prediction was.
//!
//! # Example
//!
//! ```rust
//! use bigoh::prelude::*;
//!
//! // The model: quadratic, so doubling n quadruples the time.
//! let t2 = model::extrapolate(AlgorithmId::Alg3, 10, 1.0, 20).unwrap();
//! assert_eq!(t2, 4.0);
//!
//! // The pipeline: measure at two sizes and compare.
//! let mut harness = Harness::new(HarnessConfig::new().with_random_seed(7));
//! let estimate = harness.estimate(AlgorithmId::Alg3, 300, 600).unwrap();
//! assert!(estimate.error.is_finite());
//! ```

// Core types
pub use bigoh_core::{model, AlgorithmId, BigOhError, GrowthFunction};

// Runners
pub use bigoh_algorithms::{AlgorithmRunner, FragmentRunner};

// Timing pipeline
pub use bigoh_benchmark::{
    CsvExporter, Estimate, Estimator, MarkdownReport, Measure, NoSettle, RobustTimer, Settle,
    SettleHint, Sweep, SweepCase, SweepResult, Timer, YieldSettle, SAMPLE_COUNT,
};

// Configuration
pub use bigoh_config::{ConfigError, HarnessConfig, ReportConfig, SettleMode, SweepConfig};

mod harness;
pub use harness::{settle_for, sweep_from_config, Harness, HarnessError, HarnessTimer};

#[cfg(feature = "console")]
pub mod console;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::{model, AlgorithmId, GrowthFunction};
    pub use super::{AlgorithmRunner, FragmentRunner};
    pub use super::{Estimate, Estimator, Measure, RobustTimer, Sweep, SweepResult, Timer};
    pub use super::{Harness, HarnessConfig};
}
