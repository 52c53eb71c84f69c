//! Criterion `estimates.json` reader.
//!
//! Criterion writes one `<results root>/<bench>/new/estimates.json` per
//! benchmark, overwriting it on every run. This module only ever reads those
//! files; a missing artifact is reported distinctly from a malformed one so
//! the gate can phrase the two differently.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Criterion stores time-valued estimates in nanoseconds, even when its CLI
/// output formats them as ns/us/ms. Fixed contract of the storage format,
/// not a configuration knob.
const SECONDS_PER_NANOSECOND: f64 = 1e-9;

/// Failure to obtain a benchmark's median estimate.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The `estimates.json` artifact does not exist.
    #[error("missing estimates file: {}", .path.display())]
    Missing {
        /// Resolved artifact path.
        path: PathBuf,
    },

    /// The artifact exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        /// Resolved artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The artifact is not valid JSON, or `median.point_estimate` is absent
    /// or not numeric.
    #[error("failed to parse {}: {source}", .path.display())]
    Malformed {
        /// Resolved artifact path.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Subset of Criterion's estimates schema the gate cares about. All other
/// fields (mean, slope, std_dev, ...) are ignored.
#[derive(Debug, Deserialize)]
struct Estimates {
    median: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Resolve the `estimates.json` location for a benchmark name.
///
/// Criterion's directory convention: `<results root>/<name>/new/estimates.json`.
pub fn estimates_path(results_root: &Path, name: &str) -> PathBuf {
    results_root.join(name).join("new").join("estimates.json")
}

/// Read a benchmark's median point estimate, normalized to seconds.
///
/// No caching: every call re-reads the file, so repeated evaluation within a
/// run always reflects the current on-disk state.
pub fn read_median_seconds(results_root: &Path, name: &str) -> Result<f64, EstimateError> {
    let path = estimates_path(results_root, name);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(EstimateError::Missing { path });
        }
        Err(source) => return Err(EstimateError::Unreadable { path, source }),
    };
    let estimates: Estimates =
        serde_json::from_str(&raw).map_err(|source| EstimateError::Malformed { path, source })?;
    Ok(estimates.median.point_estimate * SECONDS_PER_NANOSECOND)
}
