//! Runner fixtures.

use std::time::{Duration, Instant};

use bigoh_algorithms::AlgorithmRunner;
use bigoh_core::{AlgorithmId, BigOhError, Result};

/// Runner that does no work and records every call.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Vec<(AlgorithmId, u64)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl AlgorithmRunner for RecordingRunner {
    fn run(&mut self, id: AlgorithmId, size: u64) -> Result<i64> {
        self.calls.push((id, size));
        Ok(size as i64)
    }
}

/// Runner that fails on a chosen algorithm, or after a number of calls.
///
/// # Example
///
/// ```
/// use bigoh_algorithms::AlgorithmRunner;
/// use bigoh_core::AlgorithmId;
/// use bigoh_test::FailingRunner;
///
/// let mut runner = FailingRunner::on_call(2);
/// assert!(runner.run(AlgorithmId::Alg1, 1).is_ok());
/// assert!(runner.run(AlgorithmId::Alg1, 1).is_ok());
/// assert!(runner.run(AlgorithmId::Alg1, 1).is_err());
/// ```
#[derive(Debug, Default)]
pub struct FailingRunner {
    fail_on: Option<AlgorithmId>,
    fail_after: Option<usize>,
    pub calls: usize,
}

impl FailingRunner {
    /// Fails every run of `id`.
    pub fn on_algorithm(id: AlgorithmId) -> Self {
        Self {
            fail_on: Some(id),
            ..Self::default()
        }
    }

    /// Succeeds `ok_calls` times, then fails every call.
    pub fn on_call(ok_calls: usize) -> Self {
        Self {
            fail_after: Some(ok_calls),
            ..Self::default()
        }
    }
}

impl AlgorithmRunner for FailingRunner {
    fn run(&mut self, id: AlgorithmId, _size: u64) -> Result<i64> {
        let call = self.calls;
        self.calls += 1;

        if self.fail_on == Some(id) {
            return Err(BigOhError::Runner(format!("{id} is configured to fail")));
        }
        if self.fail_after.is_some_and(|ok| call >= ok) {
            return Err(BigOhError::Runner(format!("call {call} is configured to fail")));
        }
        Ok(0)
    }
}

/// Runner whose cost follows the growth model exactly.
///
/// Busy-waits for `unit * f(n)` so estimates made from its timings should
/// land close to zero error.
#[derive(Debug, Clone, Copy)]
pub struct SpinRunner {
    unit: Duration,
}

impl SpinRunner {
    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }
}

impl AlgorithmRunner for SpinRunner {
    fn run(&mut self, id: AlgorithmId, size: u64) -> Result<i64> {
        let target = self.unit.mul_f64(id.growth().eval(size as f64));
        let start = Instant::now();
        let mut spins = 0i64;
        while start.elapsed() < target {
            spins = std::hint::black_box(spins.wrapping_add(1));
        }
        Ok(spins)
    }
}
