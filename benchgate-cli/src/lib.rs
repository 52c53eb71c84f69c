#![warn(missing_docs)]
//! BenchGate CLI Library
//!
//! Entry point for the `benchgate` binary: argument parsing, optional
//! harness invocation, gate evaluation, report rendering, and exit-code
//! mapping.
//!
//! Exit codes:
//! - `0` — gate passed
//! - `1` — one or more threshold violations
//! - `2` — results root missing (harness never ran)
//! - anything else — passthrough from `cargo bench` when `--run` is used

mod harness;
mod report;

pub use harness::run_cargo_bench;
pub use report::{PASS_MESSAGE, render_failure};

use benchgate_core::{GateError, Outcome, format_seconds, registry};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Exit code for one or more threshold violations.
pub const EXIT_VIOLATIONS: i32 = 1;
/// Exit code for a missing results root.
pub const EXIT_NO_RESULTS: i32 = 2;

/// BenchGate CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchgate")]
#[command(author, version, about = "Criterion benchmark regression gate")]
pub struct Cli {
    /// Optional subcommand; defaults to evaluating the gate
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run `cargo bench` before checking thresholds
    #[arg(long)]
    pub run: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the threshold table without evaluating anything
    List,
}

/// Run the BenchGate CLI. Returns the process exit code.
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("benchgate=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let repo_root = std::env::current_dir()?;
    run_with_cli(&cli, &repo_root)
}

/// Run the BenchGate CLI with pre-parsed arguments against `repo_root`.
///
/// The gate's report goes to stdout (pass) or stderr (fail); the returned
/// code is the process exit code.
pub fn run_with_cli(cli: &Cli, repo_root: &Path) -> anyhow::Result<i32> {
    if let Some(Commands::List) = cli.command {
        list_thresholds();
        return Ok(0);
    }

    // A failed benchmark run must never be silently evaluated against stale
    // or partial data, so the harness's own exit code short-circuits here.
    if cli.run {
        let status = run_cargo_bench(repo_root)?;
        if !status.success() {
            return Ok(harness::exit_code(status));
        }
    }

    let results_root = repo_root.join("target").join("criterion");
    match benchgate_core::evaluate(&results_root, &registry()) {
        Ok(report) => match report.outcome() {
            Outcome::Pass => {
                println!("{PASS_MESSAGE}");
                Ok(0)
            }
            Outcome::Fail => {
                eprint!("{}", render_failure(&report.violations));
                Ok(EXIT_VIOLATIONS)
            }
        },
        Err(err @ GateError::ResultsRootMissing(_)) => {
            eprintln!("{err}");
            Ok(EXIT_NO_RESULTS)
        }
    }
}

fn list_thresholds() {
    println!("Benchmark gate thresholds:");
    let registry = registry();
    for (name, limit) in &registry {
        println!("  {} <= {}s", name, format_seconds(*limit));
    }
    println!("{} thresholds.", registry.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_evaluate_only() {
        let cli = Cli::try_parse_from(["benchgate"]).unwrap();
        assert!(!cli.run);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_flag() {
        let cli = Cli::try_parse_from(["benchgate", "--run"]).unwrap();
        assert!(cli.run);
    }

    #[test]
    fn test_list_subcommand() {
        let cli = Cli::try_parse_from(["benchgate", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["benchgate", "extra"]).is_err());
    }
}
