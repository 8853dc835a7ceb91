//! bigoh CLI: time algorithm fragments and check growth-rate predictions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bigoh::{model, AlgorithmId, Estimate, Harness, HarnessConfig, MarkdownReport};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "bigoh.toml";

#[derive(Parser)]
#[command(
    name = "bigoh",
    about = "Empirical timing and Big-O growth-rate estimation",
    version
)]
struct Cli {
    /// TOML or YAML harness configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed for the runner's random step (overrides the config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu: pick a method, enter a size, see the time
    Menu,
    /// Time one algorithm at one size
    Time {
        /// Algorithm identifier (1-6 or alg1-alg6)
        #[arg(long)]
        alg: AlgorithmId,
        /// Problem size
        #[arg(long)]
        size: u64,
        /// Report the minimum of five samples instead of a single run
        #[arg(long)]
        robust: bool,
    },
    /// Measure at two sizes and compare the prediction with reality
    Estimate {
        #[arg(long)]
        alg: AlgorithmId,
        #[arg(long)]
        n1: u64,
        #[arg(long)]
        n2: u64,
    },
    /// Run the configured (or standard) sweep and export reports
    Sweep {
        /// Write a CSV report here
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write a Markdown report here
        #[arg(long)]
        markdown: Option<PathBuf>,
    },
    /// Predict the time at n2 from a known time at n1, without running anything
    Model {
        #[arg(long)]
        alg: AlgorithmId,
        #[arg(long)]
        n1: u64,
        /// Known time at n1, in seconds
        #[arg(long)]
        t1: f64,
        #[arg(long)]
        n2: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Menu);

    // Pure arithmetic needs neither config nor logging.
    if let Commands::Model { alg, n1, t1, n2 } = command {
        return cmd_model(alg, n1, t1, n2);
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.random_seed = Some(seed);
    }

    match command {
        Commands::Menu => cmd_menu(&mut start(config)),
        Commands::Time { alg, size, robust } => cmd_time(&mut start(config), alg, size, robust),
        Commands::Estimate { alg, n1, n2 } => cmd_estimate(&mut start(config), alg, n1, n2),
        Commands::Sweep { csv, markdown } => {
            if csv.is_some() {
                config.report.csv = csv;
            }
            if markdown.is_some() {
                config.report.markdown = markdown;
            }
            cmd_sweep(start(config))
        }
        Commands::Model { alg, n1, t1, n2 } => cmd_model(alg, n1, t1, n2),
    }
}

/// Installs console logging and builds the harness.
fn start(config: HarnessConfig) -> Harness {
    bigoh::console::init(&config);
    Harness::new(config)
}

fn load_config(path: Option<&Path>) -> Result<HarnessConfig> {
    match path {
        Some(path) => HarnessConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => HarnessConfig::load(DEFAULT_CONFIG)
            .with_context(|| format!("Failed to load config {DEFAULT_CONFIG}")),
        None => Ok(HarnessConfig::default()),
    }
}

// ─── Command implementations ──────────────────────────────────────────────────

fn cmd_menu(harness: &mut Harness) -> Result<()> {
    let mut items: Vec<String> = AlgorithmId::ALL
        .iter()
        .map(|id| format!("Method #{}", id.number()))
        .collect();
    items.push("Quit".to_string());
    let quit = items.len() - 1;

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Enter your choice")
            .items(&items)
            .default(0)
            .interact()?;
        if choice == quit {
            break;
        }

        let id = AlgorithmId::ALL[choice];
        let size: u64 = Input::new()
            .with_prompt("How many elements")
            .interact_text()?;
        let elapsed = harness.measure(id, size)?;
        println!(
            "The time for alg{} with n={} is {} ms.\n",
            id.number(),
            size,
            elapsed.as_millis()
        );
    }

    println!("Quitting");
    Ok(())
}

fn cmd_time(harness: &mut Harness, alg: AlgorithmId, size: u64, robust: bool) -> Result<()> {
    let elapsed = if robust {
        harness.robust_measure(alg, size)?
    } else {
        harness.measure(alg, size)?
    };
    println!(
        "The time for alg{} with n={} is {} ms.",
        alg.number(),
        size,
        elapsed.as_millis()
    );
    Ok(())
}

fn cmd_estimate(harness: &mut Harness, alg: AlgorithmId, n1: u64, n2: u64) -> Result<()> {
    let estimate = harness
        .estimate(alg, n1, n2)
        .with_context(|| format!("Estimate for {alg} ({n1} -> {n2}) failed"))?;
    print_estimate(&estimate);
    Ok(())
}

fn cmd_sweep(mut harness: Harness) -> Result<()> {
    let sweep = harness.sweep();
    let result = harness
        .run_sweep(&sweep)
        .with_context(|| format!("Sweep '{}' failed", sweep.name()))?;

    print!("{}", MarkdownReport::to_string(&result));
    for path in harness.write_reports(&result)? {
        println!("{} {}", "Wrote".green(), path.display());
    }
    Ok(())
}

fn cmd_model(alg: AlgorithmId, n1: u64, t1: f64, n2: u64) -> Result<()> {
    let t2 = model::extrapolate(alg, n1, t1, n2)?;
    println!(
        "Predicted time for {alg} ({}) with n={n2} is {t2} s.",
        alg.growth()
    );
    Ok(())
}

fn print_estimate(estimate: &Estimate) {
    let ms = |d: std::time::Duration| d.as_secs_f64() * 1000.0;
    println!(
        "{} ({})",
        estimate.algorithm.to_string().bold(),
        estimate.growth()
    );
    println!("  t1 (n={}):          {:.3} ms", estimate.n1, ms(estimate.t1));
    println!("  t2 (n={}):          {:.3} ms", estimate.n2, ms(estimate.t2_actual));
    println!("  t2 predicted:       {:.3} ms", ms(estimate.t2_estimate));
    let error = format!("{:+.2}%", estimate.error * 100.0);
    if estimate.abs_error() <= 0.25 {
        println!("  error:              {}", error.green());
    } else {
        println!("  error:              {}", error.red());
    }
}
