use std::ffi::OsStr;
use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

use crate::exit_codes;
use crate::wait_status::WaitStatus;

/// A child process that has been waited on.
pub struct WaitOutcome {
    pub pid: u32,
    /// Raw status word as written by the wait call.
    pub status: i32,
}

/// Why a child could not be run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The program could not be started (e.g. not found).
    Spawn(String),
    /// The program started but waiting on it failed.
    Wait(String),
}

impl RunError {
    /// Exit code `wstatus run` reports for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn(_) => exit_codes::PREREQ_NOT_FOUND,
            Self::Wait(_) => exit_codes::RUNTIME_ERROR,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(msg) | Self::Wait(msg) => write!(f, "{msg}"),
        }
    }
}

/// Run `prog` with `args`, streaming stdio through the parent, and wait for it.
///
/// Returns `Err` if the process could not be spawned (e.g. program not found)
/// or waited on. A non-zero exit or a signal is NOT an error; it is in
/// `WaitOutcome.status`.
pub fn run_wait<S: AsRef<OsStr>>(prog: &str, args: &[S]) -> Result<WaitOutcome, RunError> {
    let mut child = Command::new(prog)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| RunError::Spawn(format!("Failed to run {prog}: {e}")))?;
    let pid = child.id();
    let status = child
        .wait()
        .map_err(|e| RunError::Wait(format!("Failed to wait for {prog} (pid {pid}): {e}")))?;
    Ok(WaitOutcome {
        pid,
        status: status.into_raw(),
    })
}

/// The exit code a shell would report for `status`: the exit code itself,
/// `128 + signal` for a signal, and 1 for anything else.
pub fn shell_exit_code(status: i32) -> i32 {
    match WaitStatus::from_raw(status) {
        WaitStatus::Exited { code } => code,
        WaitStatus::Signaled { signal, .. } | WaitStatus::Stopped { signal } => 128 + signal,
        WaitStatus::Unknown => 1,
    }
}
