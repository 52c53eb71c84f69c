//! Upper-bound thresholds on median latency, per benchmark.
//!
//! This table is the only tunable surface of the gate: it is hand-curated
//! policy, not mechanism. Limits stay intentionally generous to avoid flaky
//! failures across machines, but tight enough to catch obvious regressions.
//! Adding or changing an entry requires no change anywhere else.

use std::collections::BTreeMap;

/// Upper bound on one benchmark's median point estimate.
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    /// Criterion benchmark identifier.
    pub name: &'static str,
    /// Maximum acceptable median, in seconds. Strictly positive.
    pub limit_seconds: f64,
}

/// The curated threshold table.
pub static THRESHOLDS: &[Threshold] = &[
    // "nano" benchmarks: keep very generous (these are extremely machine-dependent).
    Threshold { name: "game_tick_16ms", limit_seconds: 20e-9 },
    Threshold { name: "clear_4_lines", limit_seconds: 200e-9 },
    Threshold { name: "snapshot_meta_into", limit_seconds: 200e-9 },
    Threshold { name: "snapshot_board_into", limit_seconds: 200e-9 },
    // "micro" benchmarks: these are the ones most likely to regress materially.
    Threshold { name: "build_observation+to_writer", limit_seconds: 5e-6 },
    Threshold { name: "build_observation_only", limit_seconds: 3e-6 },
    Threshold { name: "serialize_observation_to_writer", limit_seconds: 5e-6 },
    Threshold { name: "serialize_observation_to_writer_dynamic", limit_seconds: 8e-6 },
    Threshold { name: "render_into", limit_seconds: 10e-6 },
    Threshold { name: "encode_diff_into", limit_seconds: 20e-6 },
    Threshold { name: "encode_diff_into_noop", limit_seconds: 5e-6 },
    // JSON parsing can vary a lot by CPU and serde_json version; keep generous.
    Threshold { name: "parse_command_action", limit_seconds: 50e-6 },
];

/// The threshold table as a map, keyed by benchmark name.
///
/// `BTreeMap` iteration is lexicographic by name, which is what gives the
/// gate its deterministic evaluation and report order.
pub fn registry() -> BTreeMap<&'static str, f64> {
    THRESHOLDS
        .iter()
        .map(|t| (t.name, t.limit_seconds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_not_empty() {
        assert!(!THRESHOLDS.is_empty());
    }

    #[test]
    fn test_all_limits_strictly_positive() {
        for t in THRESHOLDS {
            assert!(t.limit_seconds > 0.0, "{} has non-positive limit", t.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let registry = registry();
        assert_eq!(registry.len(), THRESHOLDS.len());
    }

    #[test]
    fn test_registry_iterates_lexicographically() {
        let names: Vec<_> = registry().into_keys().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_lookup_known_entry() {
        let registry = registry();
        assert_eq!(registry.get("game_tick_16ms"), Some(&20e-9));
        assert_eq!(registry.get("no_such_bench"), None);
    }
}
