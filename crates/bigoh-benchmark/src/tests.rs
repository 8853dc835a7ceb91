//! Tests for timing, robust sampling, estimation and reports.

use std::collections::VecDeque;
use std::time::Duration;

use bigoh_core::{AlgorithmId, BigOhError, Result};
use bigoh_test::{FailingRunner, RecordingRunner};

use super::*;

/// Measurement that replays scripted durations and records each call.
#[derive(Debug, Default)]
struct ScriptedMeasure {
    script: VecDeque<Result<Duration>>,
    calls: Vec<(AlgorithmId, u64)>,
}

impl ScriptedMeasure {
    fn from_millis(millis: &[u64]) -> Self {
        Self {
            script: millis
                .iter()
                .map(|&ms| Ok(Duration::from_millis(ms)))
                .collect(),
            calls: Vec::new(),
        }
    }

    fn push_error(mut self, error: BigOhError) -> Self {
        self.script.push_back(Err(error));
        self
    }
}

impl Measure for ScriptedMeasure {
    fn measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration> {
        self.calls.push((id, size));
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(BigOhError::Runner("script exhausted".to_string())))
    }
}

/// Settle hint that counts invocations.
#[derive(Debug, Default)]
struct CountingSettle(usize);

impl SettleHint for CountingSettle {
    fn settle(&mut self) {
        self.0 += 1;
    }
}

#[test]
fn test_timer_calls_runner_once() {
    let mut timer = Timer::new(RecordingRunner::new());
    timer.measure(AlgorithmId::Alg2, 17).unwrap();

    assert_eq!(timer.runner().calls, vec![(AlgorithmId::Alg2, 17)]);
}

#[test]
fn test_timer_settles_before_each_sample() {
    let mut settle = CountingSettle::default();
    {
        let mut timer = Timer::with_settle(RecordingRunner::new(), &mut settle);
        timer.measure(AlgorithmId::Alg1, 1).unwrap();
        timer.measure(AlgorithmId::Alg1, 1).unwrap();
    }
    assert_eq!(settle.0, 2);
}

#[test]
fn test_timer_propagates_runner_failure() {
    let mut timer = Timer::new(FailingRunner::on_algorithm(AlgorithmId::Alg5));

    assert!(timer.measure(AlgorithmId::Alg1, 10).is_ok());
    assert!(matches!(
        timer.measure(AlgorithmId::Alg5, 10),
        Err(BigOhError::Runner(_))
    ));
}

#[test]
fn test_robust_takes_exactly_five_samples() {
    let mut robust = RobustTimer::new(ScriptedMeasure::from_millis(&[1, 2, 3, 4, 5, 6]));
    robust.robust_measure(AlgorithmId::Alg3, 40).unwrap();

    assert_eq!(robust.inner().calls.len(), SAMPLE_COUNT);
    assert!(robust
        .inner()
        .calls
        .iter()
        .all(|&call| call == (AlgorithmId::Alg3, 40)));
}

#[test]
fn test_robust_returns_minimum() {
    let cases: [[u64; 5]; 5] = [
        [9, 3, 7, 5, 8],
        [1, 3, 7, 5, 8],
        [9, 3, 7, 5, 2],
        [4, 4, 4, 4, 4],
        [6, 2, 9, 2, 7],
    ];

    for samples in cases {
        let expected = Duration::from_millis(*samples.iter().min().unwrap());
        let mut robust = RobustTimer::new(ScriptedMeasure::from_millis(&samples));
        assert_eq!(
            robust.robust_measure(AlgorithmId::Alg1, 1).unwrap(),
            expected,
            "samples {samples:?}"
        );
    }
}

#[test]
fn test_robust_samples_in_order() {
    let mut robust = RobustTimer::new(ScriptedMeasure::from_millis(&[5, 4, 3, 2, 1]));
    let samples = robust.samples(AlgorithmId::Alg1, 1).unwrap();

    assert_eq!(samples[0], Duration::from_millis(5));
    assert_eq!(samples[4], Duration::from_millis(1));
}

#[test]
fn test_robust_aborts_on_failing_sample() {
    let measure = ScriptedMeasure::from_millis(&[3, 2])
        .push_error(BigOhError::Runner("boom".to_string()));
    let mut robust = RobustTimer::new(measure);

    let result = robust.robust_measure(AlgorithmId::Alg1, 1);
    assert_eq!(result, Err(BigOhError::Runner("boom".to_string())));
    // No retry and no further samples after the failure.
    assert_eq!(robust.inner().calls.len(), 3);
}

#[test]
fn test_estimate_pipeline() {
    // n1 samples, then n2 samples.
    let measure = ScriptedMeasure::from_millis(&[
        110, 100, 120, 105, 130, //
        500, 480, 460, 470, 490,
    ]);
    let mut estimator = Estimator::new(measure);

    let estimate = estimator.estimate(AlgorithmId::Alg3, 1_000, 2_000).unwrap();
    assert_eq!(estimate.t1, Duration::from_millis(100));
    assert_eq!(estimate.t2_actual, Duration::from_millis(460));
    assert_eq!(estimate.t2_estimate, Duration::from_millis(400));
    assert!((estimate.error - (400.0 - 460.0) / 460.0).abs() < 1e-9);
    assert!(!estimate.is_overestimate());

    let calls = &estimator.timer_mut().inner().calls;
    assert_eq!(calls.len(), 2 * SAMPLE_COUNT);
    assert!(calls[..SAMPLE_COUNT].iter().all(|c| c.1 == 1_000));
    assert!(calls[SAMPLE_COUNT..].iter().all(|c| c.1 == 2_000));
}

#[test]
fn test_compute_percent_error_linear() {
    let measure = ScriptedMeasure::from_millis(&[500, 500, 500, 500, 500, 800, 800, 800, 800, 800]);
    let mut estimator = Estimator::new(measure);

    let error = estimator
        .compute_percent_error(AlgorithmId::Alg1, 100, 200)
        .unwrap();
    assert!((error - 0.25).abs() < 1e-9);
}

#[test]
fn test_estimate_zero_measurement_is_an_error() {
    let measure = ScriptedMeasure::from_millis(&[1, 1, 1, 1, 1, 0, 0, 0, 0, 0]);
    let mut estimator = Estimator::new(measure);

    assert_eq!(
        estimator.compute_percent_error(AlgorithmId::Alg1, 10, 20),
        Err(BigOhError::ZeroReferenceTiming)
    );
}

#[test]
fn test_estimate_zero_first_size_is_an_error() {
    let mut estimator = Estimator::new(Timer::new(RecordingRunner::new()));

    assert_eq!(
        estimator.estimate(AlgorithmId::Alg5, 0, 1_000),
        Err(BigOhError::ZeroProblemSize)
    );
    assert!(estimator.into_inner().into_runner().calls.is_empty());
}

#[test]
fn test_estimate_propagates_runner_failure() {
    let mut estimator = Estimator::new(Timer::new(FailingRunner::on_call(7)));

    let result = estimator.estimate(AlgorithmId::Alg1, 10, 20);
    assert!(matches!(result, Err(BigOhError::Runner(_))));
    assert_eq!(estimator.into_inner().into_runner().calls, 8);
}

#[test]
fn test_sweep_runs_cases_in_order() {
    let mut millis = Vec::new();
    for _ in 0..3 {
        millis.extend([10; SAMPLE_COUNT]);
        millis.extend([40; SAMPLE_COUNT]);
    }
    let mut estimator = Estimator::new(ScriptedMeasure::from_millis(&millis));

    let sweep = Sweep::new("Scripted")
        .with_pairs(&[AlgorithmId::Alg3, AlgorithmId::Alg4], &[(10, 20)])
        .with_case(AlgorithmId::Alg1, 10, 20)
        .with_seed(3);
    let result = sweep.run(&mut estimator).unwrap();

    assert_eq!(result.name, "Scripted");
    assert_eq!(result.seed, Some(3));
    assert_eq!(result.estimate_count(), 3);
    assert_eq!(result.estimates[0].algorithm, AlgorithmId::Alg3);
    assert_eq!(result.estimates[1].algorithm, AlgorithmId::Alg4);
    assert_eq!(result.estimates[2].algorithm, AlgorithmId::Alg1);

    // Quadratic predicts 40 ms exactly; linear predicts 20 ms against 40 ms.
    assert!(result.estimates[0].error.abs() < 1e-9);
    assert!((result.estimates[2].error + 0.5).abs() < 1e-9);
    assert_eq!(result.worst().unwrap().algorithm, AlgorithmId::Alg1);
    assert!((result.mean_abs_error().unwrap() - 0.5 / 3.0).abs() < 1e-9);
}

#[test]
fn test_sweep_stops_at_first_failure() {
    let measure = ScriptedMeasure::from_millis(&[10; SAMPLE_COUNT * 2])
        .push_error(BigOhError::Runner("late".to_string()));
    let mut estimator = Estimator::new(measure);

    let sweep = Sweep::new("Failing")
        .with_case(AlgorithmId::Alg1, 10, 20)
        .with_case(AlgorithmId::Alg1, 20, 40);
    assert!(sweep.run(&mut estimator).is_err());
}

#[test]
fn test_standard_sweep_covers_every_algorithm() {
    let sweep = Sweep::standard("Standard");
    for id in AlgorithmId::ALL {
        assert!(sweep.cases().iter().any(|c| c.algorithm == id));
    }
    assert!(sweep.cases().iter().all(|c| c.n1 > 0 && c.n2 > c.n1));
}

fn sample_result() -> SweepResult {
    let mut result = SweepResult::new("Report", Some(11));
    result.add_estimate(Estimate {
        algorithm: AlgorithmId::Alg3,
        n1: 1_000,
        n2: 2_000,
        t1: Duration::from_millis(10),
        t2_actual: Duration::from_millis(50),
        t2_estimate: Duration::from_millis(40),
        error: -0.2,
    });
    result.add_estimate(Estimate {
        algorithm: AlgorithmId::Alg6,
        n1: 50,
        n2: 100,
        t1: Duration::from_millis(2),
        t2_actual: Duration::from_millis(30),
        t2_estimate: Duration::from_millis(32),
        error: 0.0625,
    });
    result
}

#[test]
fn test_csv_rows() {
    let csv = CsvExporter::to_string(&sample_result());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "algorithm,growth,n1,n2,t1_ms,t2_actual_ms,t2_estimate_ms,error"
    );
    assert_eq!(lines[1], "alg3,O(n^2),1000,2000,10.000,50.000,40.000,-0.200000");
    assert_eq!(lines[2], "alg6,O(n^4),50,100,2.000,30.000,32.000,0.062500");
}

#[test]
fn test_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.csv");

    CsvExporter::to_file(&sample_result(), &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, CsvExporter::to_string(&sample_result()));
}

#[test]
fn test_markdown_sections() {
    let md = MarkdownReport::to_string(&sample_result());

    assert!(md.contains("# Sweep: Report"));
    assert!(md.contains("- **Seed**: 11"));
    assert!(md.contains("- **Estimates**: 2"));
    assert!(md.contains("| alg3 | O(n^2) | 1 | 20.00% |"));
    assert!(md.contains("| alg6 | O(n^4) | 1 | 6.25% |"));
    assert!(md.contains("| alg3 | 1000 | 2000 | 10.000 | 50.000 | 40.000 | -20.00% |"));
    assert!(md.contains("| alg6 | 50 | 100 | 2.000 | 30.000 | 32.000 | +6.25% |"));
}

#[test]
fn test_markdown_write_to_writer() {
    let mut buffer = Vec::new();
    MarkdownReport::write(&sample_result(), &mut buffer).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        MarkdownReport::to_string(&sample_result())
    );
}
