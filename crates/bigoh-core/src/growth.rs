//! Theoretical growth functions.

use std::fmt;

/// Polynomial growth function `f(n) = n^k`.
///
/// # Example
///
/// ```
/// use bigoh_core::GrowthFunction;
///
/// assert_eq!(GrowthFunction::Cubic.eval(3.0), 27.0);
/// assert_eq!(GrowthFunction::Quadratic.ratio(10.0, 20.0), 4.0);
/// assert_eq!(GrowthFunction::Quintic.to_string(), "O(n^5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthFunction {
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
}

impl GrowthFunction {
    /// Returns the polynomial degree `k`.
    pub const fn exponent(self) -> i32 {
        match self {
            GrowthFunction::Linear => 1,
            GrowthFunction::Quadratic => 2,
            GrowthFunction::Cubic => 3,
            GrowthFunction::Quartic => 4,
            GrowthFunction::Quintic => 5,
        }
    }

    /// Evaluates `f(n)`.
    pub fn eval(self, n: f64) -> f64 {
        n.powi(self.exponent())
    }

    /// Returns `f(n2) / f(n1)`.
    ///
    /// Undefined (infinite or NaN) when `n1` is zero; callers go through
    /// [`crate::model::extrapolate`] which rejects that case.
    pub fn ratio(self, n1: f64, n2: f64) -> f64 {
        self.eval(n2) / self.eval(n1)
    }

    /// Returns the big-O label, e.g. `"O(n^2)"`.
    pub const fn label(self) -> &'static str {
        match self {
            GrowthFunction::Linear => "O(n)",
            GrowthFunction::Quadratic => "O(n^2)",
            GrowthFunction::Cubic => "O(n^3)",
            GrowthFunction::Quartic => "O(n^4)",
            GrowthFunction::Quintic => "O(n^5)",
        }
    }
}

impl fmt::Display for GrowthFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
