//! End-to-end estimation against runners with known cost.

use std::time::Duration;

use bigoh_algorithms::{AlgorithmRunner, FragmentRunner};
use bigoh_benchmark::{Estimator, Sweep, Timer, YieldSettle};
use bigoh_core::AlgorithmId;
use bigoh_test::SpinRunner;

#[test]
fn test_model_matches_runner_that_follows_it() {
    let runner = SpinRunner::new(Duration::from_micros(20));
    let mut estimator = Estimator::new(Timer::new(runner));

    // 2 ms at n=10, 8 ms at n=20.
    let estimate = estimator.estimate(AlgorithmId::Alg3, 10, 20).unwrap();
    assert!(estimate.t1 >= Duration::from_millis(2));
    assert!(estimate.t2_actual >= Duration::from_millis(8));
    assert!(estimate.abs_error() < 0.5, "error {}", estimate.error);
}

#[test]
fn test_wrong_model_shows_large_error() {
    // Runner spins n^2 units but is asked about Alg1 (linear), so the
    // prediction for the doubled size is about half the actual time.
    struct QuadraticSpin(SpinRunner);

    impl AlgorithmRunner for QuadraticSpin {
        fn run(&mut self, _id: AlgorithmId, size: u64) -> bigoh_core::Result<i64> {
            self.0.run(AlgorithmId::Alg3, size)
        }
    }

    let runner = QuadraticSpin(SpinRunner::new(Duration::from_micros(20)));
    let mut estimator = Estimator::new(Timer::new(runner));

    let error = estimator
        .compute_percent_error(AlgorithmId::Alg1, 10, 20)
        .unwrap();
    assert!(error < -0.25, "error {error}");
}

#[test]
fn test_sweep_with_fragment_runner() {
    let timer = Timer::with_settle(FragmentRunner::with_seed(42), YieldSettle);
    let mut estimator = Estimator::new(timer);

    let sweep = Sweep::new("Smoke")
        .with_case(AlgorithmId::Alg2, 40, 80)
        .with_case(AlgorithmId::Alg4, 400, 800)
        .with_seed(42);
    let result = sweep.run(&mut estimator).unwrap();

    assert_eq!(result.estimate_count(), 2);
    for estimate in &result.estimates {
        assert!(estimate.error.is_finite());
        assert!(estimate.t2_actual > Duration::ZERO);
    }
}
