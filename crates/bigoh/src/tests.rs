//! Tests for config-driven harness wiring.

use super::*;

#[test]
fn test_settle_mapping() {
    assert_eq!(settle_for(SettleMode::None), Settle::None);
    assert_eq!(settle_for(SettleMode::Yield), Settle::Yield);
}

#[test]
fn test_sweep_from_empty_config_is_standard() {
    let sweep = sweep_from_config(&HarnessConfig::new());
    assert_eq!(sweep.name(), "standard");
    assert_eq!(sweep.cases(), Sweep::standard("standard").cases());
    assert_eq!(sweep.seed(), None);
}

#[test]
fn test_sweep_from_config_cases() {
    let config = HarnessConfig::from_toml_str(
        r#"
        random_seed = 5

        [sweep]
        name = "lab"
        algorithms = [2]
        size_pairs = [[10, 20], [20, 40]]

        [[sweep.cases]]
        algorithm = 1
        n1 = 100
        n2 = 200
        "#,
    )
    .unwrap();

    let sweep = sweep_from_config(&config);
    assert_eq!(sweep.name(), "lab");
    assert_eq!(sweep.seed(), Some(5));
    assert_eq!(
        sweep.cases(),
        &[
            SweepCase::new(AlgorithmId::Alg1, 100, 200),
            SweepCase::new(AlgorithmId::Alg2, 10, 20),
            SweepCase::new(AlgorithmId::Alg2, 20, 40),
        ]
    );
}

#[test]
fn test_named_sweep_without_cases_uses_standard_cases() {
    let config = HarnessConfig::new().with_sweep(SweepConfig::new("named"));
    let sweep = sweep_from_config(&config);
    assert_eq!(sweep.name(), "named");
    assert_eq!(sweep.cases().len(), AlgorithmId::ALL.len());
}

#[test]
fn test_harness_run_sweep_and_write_reports() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("sweep.csv");
    let md = dir.path().join("sweep.md");

    let mut config = HarnessConfig::new()
        .with_random_seed(1)
        .with_sweep(SweepConfig::new("tiny").with_case(AlgorithmId::Alg4, 300, 600));
    config.report = ReportConfig {
        csv: Some(csv.clone()),
        markdown: Some(md.clone()),
    };

    let mut harness = Harness::new(config);
    let sweep = harness.sweep();
    let result = harness.run_sweep(&sweep).unwrap();
    assert_eq!(result.estimate_count(), 1);
    assert_eq!(result.seed, Some(1));

    let written = harness.write_reports(&result).unwrap();
    assert_eq!(written, vec![csv.clone(), md.clone()]);
    assert!(std::fs::read_to_string(&csv).unwrap().contains("alg4,O(n^2),300,600"));
    assert!(std::fs::read_to_string(&md).unwrap().contains("# Sweep: tiny"));
}

#[test]
fn test_harness_report_error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("missing-dir").join("sweep.csv");

    let mut config = HarnessConfig::new();
    config.report.csv = Some(bad.clone());
    let harness = Harness::new(config);

    let err = harness.write_reports(&SweepResult::new("x", None)).unwrap_err();
    assert!(matches!(err, HarnessError::Report { ref path, .. } if *path == bad));
}

#[test]
fn test_harness_zero_size_estimate_fails() {
    let mut harness = Harness::new(HarnessConfig::new().with_random_seed(3));
    let err = harness.estimate(AlgorithmId::Alg1, 0, 10).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Estimation(BigOhError::ZeroProblemSize)
    ));
}
