//! Algorithm identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::BigOhError;
use crate::growth::GrowthFunction;

/// Identifier of one of the six timed algorithm fragments.
///
/// The set is closed: raw values outside `1..=6` are rejected with
/// [`BigOhError::InvalidIdentifier`] instead of falling back to a default.
///
/// # Example
///
/// ```
/// use bigoh_core::{AlgorithmId, BigOhError, GrowthFunction};
///
/// let id = AlgorithmId::try_from(3u32).unwrap();
/// assert_eq!(id, AlgorithmId::Alg3);
/// assert_eq!(id.growth(), GrowthFunction::Quadratic);
///
/// assert_eq!(
///     AlgorithmId::try_from(99u32),
///     Err(BigOhError::InvalidIdentifier(99))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum AlgorithmId {
    Alg1 = 1,
    Alg2 = 2,
    Alg3 = 3,
    Alg4 = 4,
    Alg5 = 5,
    Alg6 = 6,
}

impl AlgorithmId {
    /// All identifiers in menu order.
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::Alg1,
        AlgorithmId::Alg2,
        AlgorithmId::Alg3,
        AlgorithmId::Alg4,
        AlgorithmId::Alg5,
        AlgorithmId::Alg6,
    ];

    /// Returns the 1-based menu number.
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Returns the theoretical growth function of this algorithm.
    pub const fn growth(self) -> GrowthFunction {
        match self {
            AlgorithmId::Alg1 => GrowthFunction::Linear,
            AlgorithmId::Alg2 => GrowthFunction::Cubic,
            AlgorithmId::Alg3 => GrowthFunction::Quadratic,
            AlgorithmId::Alg4 => GrowthFunction::Quadratic,
            AlgorithmId::Alg5 => GrowthFunction::Quintic,
            AlgorithmId::Alg6 => GrowthFunction::Quartic,
        }
    }
}

impl TryFrom<i64> for AlgorithmId {
    type Error = BigOhError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AlgorithmId::Alg1),
            2 => Ok(AlgorithmId::Alg2),
            3 => Ok(AlgorithmId::Alg3),
            4 => Ok(AlgorithmId::Alg4),
            5 => Ok(AlgorithmId::Alg5),
            6 => Ok(AlgorithmId::Alg6),
            other => Err(BigOhError::InvalidIdentifier(other)),
        }
    }
}

impl TryFrom<u32> for AlgorithmId {
    type Error = BigOhError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<AlgorithmId> for u32 {
    fn from(id: AlgorithmId) -> Self {
        id.number()
    }
}

impl FromStr for AlgorithmId {
    type Err = BigOhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let raw = trimmed
            .strip_prefix("alg")
            .unwrap_or(trimmed)
            .parse::<i64>()
            .map_err(|_| BigOhError::Parse(s.to_string()))?;
        Self::try_from(raw)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alg{}", self.number())
    }
}
