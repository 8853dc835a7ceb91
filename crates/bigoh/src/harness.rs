//! Config-driven harness.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bigoh_algorithms::FragmentRunner;
use bigoh_benchmark::{
    CsvExporter, Estimate, Estimator, MarkdownReport, Measure, Settle, Sweep, SweepCase,
    SweepResult, Timer,
};
use bigoh_config::{ConfigError, HarnessConfig, SettleMode};
use bigoh_core::{AlgorithmId, BigOhError};
use thiserror::Error;
use tracing::info;

/// Error from the harness layer.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Estimation(#[from] BigOhError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Timer type used by [`Harness`].
pub type HarnessTimer = Timer<FragmentRunner, Settle>;

/// Maps the configured settle mode to a settle hint.
pub fn settle_for(mode: SettleMode) -> Settle {
    match mode {
        SettleMode::None => Settle::None,
        SettleMode::Yield => Settle::Yield,
    }
}

/// Builds the sweep described by `config`.
///
/// Falls back to [`Sweep::standard`] when the configuration has no cases.
pub fn sweep_from_config(config: &HarnessConfig) -> Sweep {
    let cases: Vec<SweepCase> = config
        .sweep
        .as_ref()
        .map(|s| {
            s.expanded_cases()
                .into_iter()
                .map(|c| SweepCase::new(c.algorithm, c.n1, c.n2))
                .collect()
        })
        .unwrap_or_default();

    let sweep = if cases.is_empty() {
        let name = config.sweep.as_ref().map_or("standard", |s| s.name.as_str());
        Sweep::standard(name)
    } else {
        let name = config.sweep.as_ref().map_or("sweep", |s| s.name.as_str());
        Sweep::new(name).with_cases(cases)
    };

    match config.random_seed {
        Some(seed) => sweep.with_seed(seed),
        None => sweep,
    }
}

/// Fragment runner, timer and estimator wired from a [`HarnessConfig`].
///
/// # Example
///
/// ```
/// use bigoh::{AlgorithmId, Harness, HarnessConfig};
///
/// let mut harness = Harness::new(HarnessConfig::new().with_random_seed(42));
/// let elapsed = harness.measure(AlgorithmId::Alg4, 200).unwrap();
/// assert!(elapsed.as_secs_f64() >= 0.0);
/// assert_eq!(harness.seed(), Some(42));
/// ```
pub struct Harness {
    config: HarnessConfig,
    estimator: Estimator<HarnessTimer>,
}

impl Harness {
    /// Creates a harness from an already loaded configuration.
    pub fn new(config: HarnessConfig) -> Self {
        let runner = FragmentRunner::from_seed_option(config.random_seed);
        let timer = Timer::with_settle(runner, settle_for(config.settle));
        Self {
            config,
            estimator: Estimator::new(timer),
        }
    }

    /// Loads the configuration file at `path` and creates a harness.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        Ok(Self::new(HarnessConfig::load(path)?))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Returns the runner seed, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.config.random_seed
    }

    /// Times a single run.
    pub fn measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration, HarnessError> {
        Ok(self.estimator.timer_mut().inner_mut().measure(id, size)?)
    }

    /// Times the minimum of five runs.
    pub fn robust_measure(&mut self, id: AlgorithmId, size: u64) -> Result<Duration, HarnessError> {
        Ok(self.estimator.timer_mut().robust_measure(id, size)?)
    }

    /// Measures at `n1` and `n2` and compares the model's prediction.
    pub fn estimate(&mut self, id: AlgorithmId, n1: u64, n2: u64) -> Result<Estimate, HarnessError> {
        Ok(self.estimator.estimate(id, n1, n2)?)
    }

    /// Returns the relative error of predicting `n2` from `n1`.
    pub fn compute_percent_error(
        &mut self,
        id: AlgorithmId,
        n1: u64,
        n2: u64,
    ) -> Result<f64, HarnessError> {
        Ok(self.estimator.compute_percent_error(id, n1, n2)?)
    }

    /// Returns the sweep described by the configuration.
    pub fn sweep(&self) -> Sweep {
        sweep_from_config(&self.config)
    }

    /// Runs `sweep` with this harness' estimator.
    pub fn run_sweep(&mut self, sweep: &Sweep) -> Result<SweepResult, HarnessError> {
        Ok(sweep.run(&mut self.estimator)?)
    }

    /// Writes the configured CSV and Markdown reports.
    ///
    /// Returns the paths that were written.
    pub fn write_reports(&self, result: &SweepResult) -> Result<Vec<PathBuf>, HarnessError> {
        let mut written = Vec::new();

        if let Some(path) = &self.config.report.csv {
            CsvExporter::to_file(result, path).map_err(|source| HarnessError::Report {
                path: path.clone(),
                source,
            })?;
            written.push(path.clone());
        }

        if let Some(path) = &self.config.report.markdown {
            MarkdownReport::to_file(result, path).map_err(|source| HarnessError::Report {
                path: path.clone(),
                source,
            })?;
            written.push(path.clone());
        }

        for path in &written {
            info!(event = "report_written", path = %path.display());
        }
        Ok(written)
    }
}
