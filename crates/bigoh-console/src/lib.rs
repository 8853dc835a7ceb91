//! Colorful console output for harness events.
//!
//! Provides a custom `tracing` layer that formats timing and estimation
//! events with colors. Output goes to stderr so reports printed on stdout
//! stay machine-readable.
//!
//! ## Log Levels
//!
//! - **INFO**: Sweep start/end and each estimate
//! - **DEBUG**: Robust measurement summaries (best and worst sample)
//! - **TRACE**: Individual samples

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SWEEP_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when neither `RUST_LOG` nor the caller provides one.
pub const DEFAULT_FILTER: &str = "bigoh=info";

/// Initializes console output with [`DEFAULT_FILTER`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes console output with the given filter directives.
///
/// `RUST_LOG` takes precedence when set. Prints the banner and installs
/// the [`HarnessConsoleLayer`] on the global subscriber.
pub fn init_with_filter(filter: &str) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HarnessConsoleLayer)
            .try_init();
    });
}

// Marks the start of a sweep for elapsed time tracking.
fn mark_sweep_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SWEEP_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since sweep start.
fn elapsed_secs() -> f64 {
    let epoch = EPOCH.get_or_init(Instant::now);
    let start_nanos = SWEEP_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____  _        ___  _
| __ )(_) __ _ / _ \| |__
|  _ \| |/ _` | | | | '_ \
| |_) | | (_| | |_| | | | |
|____/|_|\__, |\___/|_| |_|
         |___/
"#;

    let version_line = format!("      v{} - Growth-Rate Estimation Harness\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats harness events with colors.
pub struct HarnessConsoleLayer;

impl<S: Subscriber> Layer<S> for HarnessConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("bigoh") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    name: Option<String>,
    algorithm: Option<String>,
    growth: Option<String>,
    path: Option<String>,
    size: Option<u64>,
    n1: Option<u64>,
    n2: Option<u64>,
    case_count: Option<u64>,
    elapsed_us: Option<u64>,
    best_us: Option<u64>,
    worst_us: Option<u64>,
    t1_ms: Option<f64>,
    t2_actual_ms: Option<f64>,
    t2_estimate_ms: Option<f64>,
    error: Option<f64>,
    mean_abs_error: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "name" => self.name = Some(s),
            "algorithm" => self.algorithm = Some(s),
            "growth" => self.growth = Some(s),
            "path" => self.path = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "growth" => self.growth = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "n1" => self.n1 = Some(value),
            "n2" => self.n2 = Some(value),
            "case_count" => self.case_count = Some(value),
            "elapsed_us" => self.elapsed_us = Some(value),
            "best_us" => self.best_us = Some(value),
            "worst_us" => self.worst_us = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "t1_ms" => self.t1_ms = Some(value),
            "t2_actual_ms" => self.t2_actual_ms = Some(value),
            "t2_estimate_ms" => self.t2_estimate_ms = Some(value),
            "error" => self.error = Some(value),
            "mean_abs_error" => self.mean_abs_error = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "sweep_start" => format_sweep_start(v),
        "sweep_end" => format_sweep_end(v),
        "estimate" => format_estimate(v),
        "robust_sample" => format_robust_sample(v),
        "sample" => format_sample(v, level),
        "report_written" => format_report_written(v),
        _ => format_plain(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_us(us: u64) -> String {
    if us >= 1_000_000 {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    } else if us >= 1_000 {
        format!("{:.2}ms", us as f64 / 1_000.0)
    } else {
        format!("{}µs", us)
    }
}

fn format_error(error: f64) -> String {
    let text = format!("{:+.2}%", error * 100.0);
    match error.abs() {
        e if e < 0.10 => text.bright_green().bold().to_string(),
        e if e < 0.50 => text.bright_yellow().bold().to_string(),
        _ => text.bright_red().bold().to_string(),
    }
}

fn format_sweep_start(v: &EventVisitor) -> String {
    mark_sweep_start();
    format!(
        "{} {} Sweep {} │ {} cases",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.name.as_deref().unwrap_or("?").white().bold(),
        format_count(v.case_count.unwrap_or(0)).bright_yellow(),
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Sweep {} complete │ {} cases │ mean |error| {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.name.as_deref().unwrap_or("?").white().bold(),
        format_count(v.case_count.unwrap_or(0)).bright_yellow(),
        format!("{:.2}%", v.mean_abs_error.unwrap_or(0.0) * 100.0).bright_magenta(),
    )
}

fn format_estimate(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} │ n {} → {} │ t1 {:.3}ms │ actual {:.3}ms │ predicted {:.3}ms │ {}",
        format_elapsed(),
        "◆".bright_blue(),
        v.algorithm.as_deref().unwrap_or("?").white().bold(),
        v.growth.as_deref().unwrap_or("?").bright_magenta(),
        format_count(v.n1.unwrap_or(0)).bright_yellow(),
        format_count(v.n2.unwrap_or(0)).bright_yellow(),
        v.t1_ms.unwrap_or(0.0),
        v.t2_actual_ms.unwrap_or(0.0),
        v.t2_estimate_ms.unwrap_or(0.0),
        format_error(v.error.unwrap_or(0.0)),
    )
}

fn format_robust_sample(v: &EventVisitor) -> String {
    format!(
        "{}   {} n={} │ best {} │ worst {}",
        format_elapsed(),
        v.algorithm.as_deref().unwrap_or("?").white(),
        format_count(v.size.unwrap_or(0)),
        format_us(v.best_us.unwrap_or(0)).bright_green(),
        format_us(v.worst_us.unwrap_or(0)).yellow(),
    )
}

fn format_sample(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE && level != Level::DEBUG {
        return String::new();
    }
    format!(
        "{}     {} n={} │ {}",
        format_elapsed(),
        v.algorithm.as_deref().unwrap_or("?").bright_black(),
        format_count(v.size.unwrap_or(0)).bright_black(),
        format_us(v.elapsed_us.unwrap_or(0)).bright_black(),
    )
}

fn format_report_written(v: &EventVisitor) -> String {
    format!(
        "{} {} Report {}",
        format_elapsed(),
        "✎".bright_cyan(),
        v.path.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_plain(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    let tag = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => " WARN".bright_yellow().bold().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        _ => "TRACE".bright_black().to_string(),
    };
    format!("{} {} {}", format_elapsed(), tag, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_visitor() -> EventVisitor {
        EventVisitor {
            event: Some("estimate".to_string()),
            algorithm: Some("alg3".to_string()),
            growth: Some("O(n^2)".to_string()),
            n1: Some(1_000),
            n2: Some(2_000),
            t1_ms: Some(10.0),
            t2_actual_ms: Some(50.0),
            t2_estimate_ms: Some(40.0),
            error: Some(-0.2),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_format_estimate() {
        let out = format_event(&estimate_visitor(), Level::INFO);
        assert!(out.contains("alg3"));
        assert!(out.contains("O(n^2)"));
        assert!(out.contains("1,000"));
        assert!(out.contains("2,000"));
        assert!(out.contains("predicted 40.000ms"));
        assert!(out.contains("-20.00%"));
    }

    #[test]
    fn test_format_sweep_end() {
        let v = EventVisitor {
            event: Some("sweep_end".to_string()),
            name: Some("lab".to_string()),
            case_count: Some(6),
            mean_abs_error: Some(0.125),
            ..EventVisitor::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("lab"));
        assert!(out.contains("12.50%"));
    }

    #[test]
    fn test_format_report_written() {
        let v = EventVisitor {
            event: Some("report_written".to_string()),
            path: Some("out/sweep.csv".to_string()),
            ..EventVisitor::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("Report"));
        assert!(out.contains("out/sweep.csv"));
    }

    #[test]
    fn test_unknown_event_without_message_is_silent() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_default_filter_is_single_prefix_directive() {
        assert_eq!(DEFAULT_FILTER, "bigoh=info");
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_format_us_units() {
        assert_eq!(format_us(750), "750µs");
        assert_eq!(format_us(1_500), "1.50ms");
        assert_eq!(format_us(2_500_000), "2.50s");
    }
}
