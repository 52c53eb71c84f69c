//! Gate evaluation.
//!
//! Walks the threshold registry in lexicographic order, reads each
//! benchmark's median estimate, and accumulates every problem (missing
//! artifact, parse failure, threshold exceeded) into one report. Per-entry
//! failures never abort the walk; the only fatal condition is a missing
//! results root, which means the harness has not run at all.

use crate::estimates::{self, EstimateError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// One reason a benchmark failed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Benchmark identifier.
    pub name: String,
    /// Human-readable cause, without the name prefix.
    pub message: String,
}

/// Terminal state of one gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every registry entry was within its limit.
    Pass,
    /// At least one violation was recorded.
    Fail,
}

/// Accumulated result of walking the full registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    /// Violations in evaluation (lexicographic) order.
    pub violations: Vec<Violation>,
}

impl GateReport {
    /// Derive the run outcome from the violation list.
    pub fn outcome(&self) -> Outcome {
        if self.violations.is_empty() {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

/// Fatal precondition failure: no per-entry evaluation happened.
#[derive(Debug, Error)]
pub enum GateError {
    /// The harness's results root does not exist.
    #[error("Missing {}. Run `cargo bench` first.", .0.display())]
    ResultsRootMissing(PathBuf),
}

/// Evaluate every registry entry against the on-disk estimates.
///
/// Entries are visited in lexicographic name order so that repeated runs
/// against identical inputs produce byte-identical reports.
pub fn evaluate(
    results_root: &Path,
    registry: &BTreeMap<&'static str, f64>,
) -> Result<GateReport, GateError> {
    if !results_root.exists() {
        return Err(GateError::ResultsRootMissing(results_root.to_path_buf()));
    }

    let mut violations = Vec::new();
    for (&name, &limit) in registry {
        match estimates::read_median_seconds(results_root, name) {
            Ok(median) if median > limit => {
                debug!(name, median_s = median, limit_s = limit, "over limit");
                violations.push(Violation {
                    name: name.to_string(),
                    message: format!(
                        "median {}s > limit {}s",
                        format_seconds(median),
                        format_seconds(limit)
                    ),
                });
            }
            Ok(median) => {
                debug!(name, median_s = median, limit_s = limit, "within limit");
            }
            Err(EstimateError::Missing { path }) => {
                violations.push(Violation {
                    name: name.to_string(),
                    message: format!("missing {}", path.display()),
                });
            }
            Err(EstimateError::Unreadable { source, .. }) => {
                violations.push(Violation {
                    name: name.to_string(),
                    message: format!("failed to read estimates.json ({source})"),
                });
            }
            Err(EstimateError::Malformed { source, .. }) => {
                violations.push(Violation {
                    name: name.to_string(),
                    message: format!("failed to parse estimates.json ({source})"),
                });
            }
        }
    }

    Ok(GateReport { violations })
}

/// Render seconds in `%.3e`-style scientific notation (`2e-6` → `2.000e-06`).
///
/// Rust's `{:.3e}` emits a bare exponent (`2.000e-6`); report text uses the
/// two-digit signed exponent form, so the exponent is reformatted here.
pub fn format_seconds(value: f64) -> String {
    let formatted = format!("{value:.3e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}
