//! Subprocess invocation with guaranteed handle cleanup.

use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

#[derive(Debug)]
pub struct ExecOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run a command with stdout/stderr captured, blocking until it exits.
/// `wait_with_output` drains both pipes concurrently; reading them one at a
/// time can deadlock once the child fills the untouched pipe's buffer.
pub fn run_captured(mut cmd: Command) -> Result<ExecOutput> {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

    let child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;

    let out = child
        .wait_with_output()
        .context("failed to wait for process")?;
    Ok(ExecOutput {
        status: out.status,
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
    })
}

/// Run a command with inherited stdio (interactive), blocking until it exits.
pub fn run_streamed(mut cmd: Command) -> Result<ExitStatus> {
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    child.wait().context("failed to wait for process")
}

/// Last `max_lines` lines of the combined output, for failure reports.
pub fn output_tail(output: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_last_lines() {
        let text = "a\nb\nc\nd";
        assert_eq!(output_tail(text, 2), "c\nd");
        assert_eq!(output_tail(text, 10), "a\nb\nc\nd");
        assert_eq!(output_tail("", 5), "");
    }

    #[test]
    #[cfg(unix)]
    fn captured_run_reports_exit_code() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo out; echo err >&2; exit 3"]);
        let out = run_captured(cmd).expect("sh should spawn");
        assert_eq!(out.status.code(), Some(3));
        assert_eq!(out.stdout.trim(), "out");
        assert_eq!(out.stderr.trim(), "err");
    }

    #[test]
    #[cfg(unix)]
    fn captured_run_drains_large_stderr_without_stalling() {
        // Well past the pipe buffer size on stderr while stdout stays open;
        // a sequential reader would hang here.
        let mut cmd = Command::new("sh");
        cmd.args([
            "-c",
            "dd if=/dev/zero bs=1024 count=256 2>/dev/null | tr '\\0' 'x' >&2; echo done; exit 5",
        ]);
        let out = run_captured(cmd).expect("sh should spawn");
        assert_eq!(out.status.code(), Some(5));
        assert_eq!(out.stdout.trim(), "done");
        assert!(
            out.stderr.len() >= 256 * 1024,
            "expected full stderr capture, got {} bytes",
            out.stderr.len()
        );
    }
}
