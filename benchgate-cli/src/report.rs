//! Gate report rendering.
//!
//! Exactly one report per run: a single confirmation line on pass, or a
//! header plus one line per violation on fail. Violation order equals
//! evaluation order, so the rendered text is reproducible byte-for-byte.

use benchgate_core::Violation;

/// The single line printed to stdout when the gate passes.
pub const PASS_MESSAGE: &str = "Benchmark gate OK.";

/// Render the failure block written to stderr.
pub fn render_failure(violations: &[Violation]) -> String {
    let mut out = String::from("Benchmark gate failed:\n");
    for v in violations {
        out.push_str(&format!("  - {}: {}\n", v.name, v.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_block_layout() {
        let violations = vec![
            Violation {
                name: "render_into".to_string(),
                message: "median 2.000e-06s > limit 1.000e-06s".to_string(),
            },
            Violation {
                name: "tick".to_string(),
                message: "missing target/criterion/tick/new/estimates.json".to_string(),
            },
        ];

        let rendered = render_failure(&violations);
        assert_eq!(
            rendered,
            "Benchmark gate failed:\n\
             \x20 - render_into: median 2.000e-06s > limit 1.000e-06s\n\
             \x20 - tick: missing target/criterion/tick/new/estimates.json\n"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let violations = vec![Violation {
            name: "a".to_string(),
            message: "missing a".to_string(),
        }];
        assert_eq!(render_failure(&violations), render_failure(&violations));
    }
}
