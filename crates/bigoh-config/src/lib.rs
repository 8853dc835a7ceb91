//! Configuration system for BigOh.
//!
//! Load harness configuration from TOML or YAML files to control the random
//! seed, the settle hint, logging, sweep cases and report outputs without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use bigoh_config::{HarnessConfig, SettleMode};
//! use bigoh_core::AlgorithmId;
//!
//! let config = HarnessConfig::from_toml_str(r#"
//!     random_seed = 42
//!     settle = "yield"
//!
//!     [sweep]
//!     name = "doubling"
//!     algorithms = [3, 4]
//!     size_pairs = [[1000, 2000], [2000, 4000]]
//!
//!     [[sweep.cases]]
//!     algorithm = 5
//!     n1 = 20
//!     n2 = 40
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.settle, SettleMode::Yield);
//!
//! let cases = config.sweep.unwrap().expanded_cases();
//! assert_eq!(cases.len(), 5);
//! assert_eq!(cases[0].algorithm, AlgorithmId::Alg5);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use bigoh_config::HarnessConfig;
//!
//! let config = HarnessConfig::load("bigoh.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use bigoh_core::AlgorithmId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main harness configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Random seed for reproducible runner output.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Hint invoked before every timed sample.
    #[serde(default)]
    pub settle: SettleMode,

    /// `tracing` filter directive, e.g. `"bigoh=debug"`. `RUST_LOG` wins.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Sweep definition.
    #[serde(default)]
    pub sweep: Option<SweepConfig>,

    /// Report outputs.
    #[serde(default)]
    pub report: ReportConfig,
}

impl HarnessConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(sweep) = &self.sweep {
            sweep.validate()?;
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the settle mode.
    pub fn with_settle(mut self, settle: SettleMode) -> Self {
        self.settle = settle;
        self
    }

    /// Sets the sweep definition.
    pub fn with_sweep(mut self, sweep: SweepConfig) -> Self {
        self.sweep = Some(sweep);
        self
    }

    /// Returns the log filter, falling back to `default`.
    pub fn log_filter_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.log_filter.as_deref().unwrap_or(default)
    }
}

/// Settle hint selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleMode {
    /// No pre-measurement hook.
    #[default]
    None,

    /// Yield the thread before starting the clock.
    Yield,
}

/// Sweep configuration.
///
/// Explicit `cases` come first, followed by every combination of
/// `algorithms` and `size_pairs`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SweepConfig {
    /// Sweep name used in reports.
    #[serde(default = "default_sweep_name")]
    pub name: String,

    /// Explicit (algorithm, n1, n2) cases.
    #[serde(default)]
    pub cases: Vec<CaseConfig>,

    /// Algorithms crossed with `size_pairs`.
    #[serde(default)]
    pub algorithms: Vec<AlgorithmId>,

    /// Size pairs crossed with `algorithms`.
    #[serde(default)]
    pub size_pairs: Vec<(u64, u64)>,
}

fn default_sweep_name() -> String {
    "sweep".to_string()
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            name: default_sweep_name(),
            cases: Vec::new(),
            algorithms: Vec::new(),
            size_pairs: Vec::new(),
        }
    }
}

impl SweepConfig {
    /// Creates an empty sweep configuration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds an explicit case.
    pub fn with_case(mut self, algorithm: AlgorithmId, n1: u64, n2: u64) -> Self {
        self.cases.push(CaseConfig { algorithm, n1, n2 });
        self
    }

    /// Returns explicit cases followed by the algorithm × pair grid.
    pub fn expanded_cases(&self) -> Vec<CaseConfig> {
        let mut cases = self.cases.clone();
        for &algorithm in &self.algorithms {
            for &(n1, n2) in &self.size_pairs {
                cases.push(CaseConfig { algorithm, n1, n2 });
            }
        }
        cases
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cases.iter().any(|c| c.n1 == 0) || self.size_pairs.iter().any(|p| p.0 == 0) {
            return Err(ConfigError::Invalid(format!(
                "sweep '{}': n1 must be greater than zero",
                self.name
            )));
        }
        if !self.algorithms.is_empty() && self.size_pairs.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "sweep '{}': algorithms given without size_pairs",
                self.name
            )));
        }
        Ok(())
    }
}

/// One (algorithm, n1, n2) sweep case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CaseConfig {
    pub algorithm: AlgorithmId,
    pub n1: u64,
    pub n2: u64,
}

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// CSV output path.
    pub csv: Option<PathBuf>,

    /// Markdown output path.
    pub markdown: Option<PathBuf>,
}
