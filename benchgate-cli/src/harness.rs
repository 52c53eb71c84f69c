//! Harness invocation.
//!
//! The benchmark suite is an external collaborator: the gate runs it as a
//! single blocking child process with inherited stdio and no timeout
//! (benchmark suites can legitimately run long), and it owns the results
//! tree the gate later reads.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::info;

/// Run `cargo bench` to completion in `dir`, streams inherited.
pub fn run_cargo_bench(dir: &Path) -> io::Result<ExitStatus> {
    info!("running `cargo bench` in {}", dir.display());
    Command::new("cargo").arg("bench").current_dir(dir).status()
}

/// Map a child exit status to a process exit code.
///
/// Signal deaths have no code; they map to 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_passthrough() {
        let status = Command::new("sh").args(["-c", "exit 7"]).status().unwrap();
        assert!(!status.success());
        assert_eq!(exit_code(status), 7);
    }

    #[test]
    fn test_exit_code_success() {
        let status = Command::new("sh").args(["-c", "exit 0"]).status().unwrap();
        assert!(status.success());
        assert_eq!(exit_code(status), 0);
    }
}
