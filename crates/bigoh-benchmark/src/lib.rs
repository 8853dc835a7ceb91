//! Timing and estimation pipeline for BigOh.
//!
//! This crate measures algorithm runs, predicts timings across problem
//! sizes with the growth model from `bigoh-core`, and reports how far the
//! predictions land from reality.
//!
//! # Overview
//!
//! - [`Timer`] - one wall-clock sample of an [`AlgorithmRunner`](bigoh_algorithms::AlgorithmRunner) run
//! - [`RobustTimer`] - minimum of [`SAMPLE_COUNT`] sequential samples
//! - [`Estimator`] - measure at `n1` and `n2`, extrapolate, compare
//! - [`Sweep`] - batches of estimates collected into a [`SweepResult`]
//! - [`CsvExporter`] / [`MarkdownReport`] - report export
//!
//! # Zero-Erasure Design
//!
//! Runners, settle hints and measurements are stored as type parameters,
//! not trait objects.
//!
//! # Example
//!
//! ```
//! use bigoh_algorithms::FragmentRunner;
//! use bigoh_benchmark::{Estimator, Sweep, Timer, YieldSettle};
//! use bigoh_core::AlgorithmId;
//!
//! let timer = Timer::with_settle(FragmentRunner::with_seed(42), YieldSettle);
//! let mut estimator = Estimator::new(timer);
//!
//! let sweep = Sweep::new("Quadratic check")
//!     .with_case(AlgorithmId::Alg3, 300, 600)
//!     .with_seed(42);
//!
//! let result = sweep.run(&mut estimator).unwrap();
//! assert_eq!(result.estimate_count(), 1);
//! ```

mod estimate;
mod report;
mod result;
mod robust;
mod settle;
mod sweep;
mod timer;

#[cfg(test)]
mod tests;

pub use estimate::{Estimate, Estimator};
pub use report::{CsvExporter, MarkdownReport};
pub use result::SweepResult;
pub use robust::{RobustTimer, SAMPLE_COUNT};
pub use settle::{NoSettle, Settle, SettleHint, YieldSettle};
pub use sweep::{Sweep, SweepCase};
pub use timer::{Measure, Timer};
