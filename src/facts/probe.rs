// External utility invocation. Failures are logged at debug and reported as absence.

use std::process::Stdio;
use tokio::process::Command;

/// Run `command` (program + args) with `extra` args appended; stdout on exit 0.
pub(super) async fn capture(command: &[String], extra: &[&str]) -> Option<String> {
    let (program, args) = command.split_first()?;
    let output = Command::new(program)
        .args(args)
        .args(extra)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await;
    match output {
        Ok(out) if out.status.success() => Some(String::from_utf8_lossy(&out.stdout).into_owned()),
        Ok(out) => {
            tracing::debug!(program = %program, status = %out.status, "command exited unsuccessfully");
            None
        }
        Err(e) => {
            tracing::debug!(program = %program, error = %e, "command could not be run");
            None
        }
    }
}

/// True when `program` runs and exits 0. Output is discarded.
pub(super) async fn succeeds(program: &str, args: &[&str]) -> bool {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;
    match status {
        Ok(s) => {
            if !s.success() {
                tracing::debug!(program, status = %s, "probe failed");
            }
            s.success()
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "probe could not be run");
            false
        }
    }
}
