//! Report generation for sweep results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use bigoh_core::AlgorithmId;

use crate::result::SweepResult;

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// CSV exporter for sweep results.
///
/// One row per estimate, with timings in milliseconds.
///
/// # Example
///
/// ```
/// use bigoh_benchmark::{CsvExporter, SweepResult};
///
/// let result = SweepResult::new("Test", None);
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("algorithm,growth,n1,n2,"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a sweep result to a CSV string.
    ///
    /// # Example
    ///
    /// ```
    /// use bigoh_benchmark::{CsvExporter, Estimate, SweepResult};
    /// use bigoh_core::AlgorithmId;
    /// use std::time::Duration;
    ///
    /// let mut result = SweepResult::new("Test", None);
    /// result.add_estimate(Estimate {
    ///     algorithm: AlgorithmId::Alg1,
    ///     n1: 100,
    ///     n2: 200,
    ///     t1: Duration::from_millis(5),
    ///     t2_actual: Duration::from_millis(8),
    ///     t2_estimate: Duration::from_millis(10),
    ///     error: 0.25,
    /// });
    ///
    /// let csv = CsvExporter::to_string(&result);
    /// assert!(csv.contains("alg1,O(n),100,200,5.000,8.000,10.000,0.250000"));
    /// ```
    pub fn to_string(result: &SweepResult) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "algorithm,growth,n1,n2,t1_ms,t2_actual_ms,t2_estimate_ms,error"
        );

        for estimate in &result.estimates {
            let _ = writeln!(
                output,
                "{},{},{},{},{:.3},{:.3},{:.3},{:.6}",
                estimate.algorithm,
                estimate.growth(),
                estimate.n1,
                estimate.n2,
                millis(estimate.t1),
                millis(estimate.t2_actual),
                millis(estimate.t2_estimate),
                estimate.error,
            );
        }

        output
    }

    /// Exports a sweep result to a CSV file.
    pub fn to_file(result: &SweepResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes a sweep result as CSV to a writer.
    pub fn write<W: Write>(result: &SweepResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a summary table (one row per algorithm) followed by the
/// individual estimates.
///
/// # Example
///
/// ```
/// use bigoh_benchmark::{MarkdownReport, SweepResult};
///
/// let result = SweepResult::new("Test", Some(7));
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Sweep: Test"));
/// assert!(md.contains("- **Seed**: 7"));
/// assert!(md.contains("*No estimates taken.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &SweepResult) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "# Sweep: {}", result.name);
        let _ = writeln!(output);

        let seed = result
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        let _ = writeln!(output, "- **Seed**: {}", seed);
        let _ = writeln!(output, "- **Estimates**: {}", result.estimate_count());
        let _ = writeln!(output);

        let _ = writeln!(output, "## Summary");
        let _ = writeln!(output);

        let Some(mean) = result.mean_abs_error() else {
            let _ = writeln!(output, "*No estimates taken.*");
            return output;
        };

        let _ = writeln!(output, "| Algorithm | Growth | Estimates | Mean abs error |");
        let _ = writeln!(output, "|-----------|--------|-----------|----------------|");
        for id in AlgorithmId::ALL {
            let errors: Vec<f64> = result.for_algorithm(id).map(|e| e.abs_error()).collect();
            if errors.is_empty() {
                continue;
            }
            let algorithm_mean = errors.iter().sum::<f64>() / errors.len() as f64;
            let _ = writeln!(
                output,
                "| {} | {} | {} | {:.2}% |",
                id,
                id.growth(),
                errors.len(),
                algorithm_mean * 100.0,
            );
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "Overall mean absolute error: {:.2}%", mean * 100.0);
        let _ = writeln!(output);

        let _ = writeln!(output, "## Estimates");
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "| Algorithm | n1 | n2 | t1 (ms) | t2 actual (ms) | t2 estimate (ms) | Error |"
        );
        let _ = writeln!(
            output,
            "|-----------|----|----|---------|----------------|------------------|-------|"
        );
        for estimate in &result.estimates {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {:.3} | {:.3} | {:.3} | {:+.2}% |",
                estimate.algorithm,
                estimate.n1,
                estimate.n2,
                millis(estimate.t1),
                millis(estimate.t2_actual),
                millis(estimate.t2_estimate),
                estimate.error * 100.0,
            );
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(result: &SweepResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(result: &SweepResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}
