//! Timed algorithms for BigOh.
//!
//! [`AlgorithmRunner`] is the seam the timing code depends on.
//! [`FragmentRunner`] is the default implementation: six nested-loop
//! fragments whose cost follows the growth table in `bigoh-core`.
//!
//! | Id | Fragment | Growth |
//! |----|----------|--------|
//! | 1 | [`fragments::linear`] | n |
//! | 2 | [`fragments::cubic`] | n^3 |
//! | 3 | [`fragments::quadratic`] | n^2 |
//! | 4 | [`fragments::triangular`] | n^2 |
//! | 5 | [`fragments::quintic`] | n^5 |
//! | 6 | [`fragments::sparse_quartic`] | n^4 |

pub mod fragments;
mod runner;


pub use runner::{AlgorithmRunner, FragmentRunner};
