#![warn(missing_docs)]
//! BenchGate Core - Gate Evaluation
//!
//! This crate provides the evaluation half of the benchmark gate:
//! - the curated threshold registry (upper bounds on median latency)
//! - the Criterion `estimates.json` reader with nanosecond → second
//!   normalization
//! - the gate evaluator that turns per-benchmark comparisons into a single
//!   deterministic report
//!
//! Running the harness, rendering the report, and mapping outcomes to exit
//! codes live in `benchgate-cli`.

mod estimates;
mod gate;
mod thresholds;

pub use estimates::{EstimateError, estimates_path, read_median_seconds};
pub use gate::{GateError, GateReport, Outcome, Violation, evaluate, format_seconds};
pub use thresholds::{THRESHOLDS, Threshold, registry};
