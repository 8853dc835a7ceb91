//! Complexity model and relative error evaluation.
//!
//! All timings here are plain `f64` seconds. Measurement code works with
//! [`std::time::Duration`] and converts at the boundary.

use crate::algorithm::AlgorithmId;
use crate::error::{BigOhError, Result};

/// Returns `f(n)` for the growth function of `id`.
///
/// # Example
///
/// ```
/// use bigoh_core::{model, AlgorithmId};
///
/// assert_eq!(model::growth(AlgorithmId::Alg1, 7.0), 7.0);
/// assert_eq!(model::growth(AlgorithmId::Alg6, 2.0), 16.0);
/// ```
pub fn growth(id: AlgorithmId, n: f64) -> f64 {
    id.growth().eval(n)
}

/// Predicts the timing at `n2` from a timing `t1` measured at `n1`.
///
/// Computes `t1 * f(n2) / f(n1)`.
///
/// # Errors
///
/// - [`BigOhError::ZeroProblemSize`] if `n1` is zero.
/// - [`BigOhError::InvalidTiming`] if `t1` is negative or not finite, or
///   if the prediction overflows.
///
/// # Example
///
/// ```
/// use bigoh_core::{model, AlgorithmId};
///
/// let t2 = model::extrapolate(AlgorithmId::Alg3, 10, 1.0, 20).unwrap();
/// assert_eq!(t2, 4.0);
/// ```
pub fn extrapolate(id: AlgorithmId, n1: u64, t1: f64, n2: u64) -> Result<f64> {
    if n1 == 0 {
        return Err(BigOhError::ZeroProblemSize);
    }
    if !t1.is_finite() || t1 < 0.0 {
        return Err(BigOhError::InvalidTiming(t1));
    }
    finite(t1 * id.growth().ratio(n1 as f64, n2 as f64))
}

/// Returns the relative error `(estimate - correct) / correct`.
///
/// Positive values mean the estimate overshoots.
///
/// # Errors
///
/// - [`BigOhError::ZeroReferenceTiming`] if `correct` is zero.
/// - [`BigOhError::InvalidTiming`] if either value or the ratio is not finite.
///
/// # Example
///
/// ```
/// use bigoh_core::model;
///
/// assert_eq!(model::percent_error(2.0, 2.5).unwrap(), 0.25);
/// assert!(model::percent_error(0.0, 1.0).is_err());
/// ```
pub fn percent_error(correct: f64, estimate: f64) -> Result<f64> {
    if !correct.is_finite() {
        return Err(BigOhError::InvalidTiming(correct));
    }
    if !estimate.is_finite() {
        return Err(BigOhError::InvalidTiming(estimate));
    }
    if correct == 0.0 {
        return Err(BigOhError::ZeroReferenceTiming);
    }
    finite((estimate - correct) / correct)
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BigOhError::InvalidTiming(value))
    }
}
