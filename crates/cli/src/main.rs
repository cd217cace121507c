//! hotloop CLI
//!
//! Command-line interface for the CPU micro-benchmark suite. With no
//! arguments it performs the baseline run: Fibonacci(40) followed by the
//! 100M-iteration accumulation loop, printed in the fixed two-block format
//! shared with the other language implementations. Subcommands add the
//! timed suite and shell completions; neither touches the baseline output.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use hotloop_core::suite::{self, Outcome};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "hotloop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CPU micro-benchmarks: recursive Fibonacci and hot accumulation loops", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timed benchmark suite
    Bench {
        /// Only run cases whose name contains this pattern
        #[arg(short, long)]
        filter: Option<String>,

        /// Write a JSON report of the executed cases to this path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hotloop_cli=warn".parse().unwrap())
                .add_directive("hotloop_core=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_baseline(),
        Some(Commands::Bench { filter, json }) => {
            run_bench(filter.as_deref(), json.as_deref());
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hotloop", &mut io::stdout());
        }
    }
}

/// The no-argument run. Stdout carries exactly the two result blocks;
/// everything else goes to stderr through tracing.
fn run_baseline() {
    info!("baseline run: fib(40) + 100M-iteration loop");
    print!("{}", hotloop_core::report::run_baseline());
}

fn run_bench(filter: Option<&str>, json: Option<&Path>) {
    let outcomes = match suite::run(filter) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            eprintln!("benchmark suite failed: {}", e);
            process::exit(1);
        }
    };

    let mut failed = false;
    for outcome in &outcomes {
        println!("{}", outcome.measurement.bench_line(suite::SUITE));
        if !outcome.passed() {
            println!(
                "ERROR: expected {}, got {}",
                outcome.expected, outcome.measurement.result
            );
            failed = true;
        }
    }

    if let Some(path) = json {
        if let Err(e) = write_report(path, &outcomes) {
            eprintln!("failed to write report {}: {}", path.display(), e);
            process::exit(1);
        }
        info!(path = %path.display(), cases = outcomes.len(), "wrote JSON report");
    }

    if failed {
        process::exit(1);
    }
}

fn write_report(path: &Path, outcomes: &[Outcome]) -> io::Result<()> {
    let measurements: Vec<_> = outcomes.iter().map(|o| &o.measurement).collect();
    let json = serde_json::to_string_pretty(&measurements).map_err(io::Error::other)?;
    fs::write(path, json)
}
