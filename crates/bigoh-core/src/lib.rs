//! Core types for BigOh.
//!
//! - [`AlgorithmId`] - closed set of timed algorithms
//! - [`GrowthFunction`] - theoretical cost `f(n)` per algorithm
//! - [`model`] - extrapolation and relative error
//! - [`BigOhError`] - shared error type
//!
//! # Example
//!
//! ```
//! use bigoh_core::{model, AlgorithmId};
//!
//! // Linear: doubling n doubles the time.
//! let t2 = model::extrapolate(AlgorithmId::Alg1, 100, 0.5, 200).unwrap();
//! assert_eq!(t2, 1.0);
//!
//! // Measured 2.0 s where 2.5 s was predicted: 25% overshoot.
//! assert_eq!(model::percent_error(2.0, 2.5).unwrap(), 0.25);
//! ```

pub mod algorithm;
pub mod error;
pub mod growth;
pub mod model;


pub use algorithm::AlgorithmId;
pub use error::{BigOhError, Result};
pub use growth::GrowthFunction;
