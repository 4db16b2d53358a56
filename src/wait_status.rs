use std::fmt;

/// How a child process changed state, as reported by a wait call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    /// Terminated normally with an exit code.
    Exited { code: i32 },
    /// Terminated by a signal, possibly leaving a core dump.
    Signaled { signal: i32, core_dumped: bool },
    /// Suspended by a signal (job control).
    Stopped { signal: i32 },
    /// None of the above, e.g. a "continued" report.
    Unknown,
}

impl WaitStatus {
    /// Classify a raw status word.
    ///
    /// Checked in order: exited, signaled, stopped. The bit layout is the
    /// platform's, so the `libc` predicates do the work.
    pub fn from_raw(status: i32) -> Self {
        if libc::WIFEXITED(status) {
            Self::Exited {
                code: libc::WEXITSTATUS(status),
            }
        } else if libc::WIFSIGNALED(status) {
            Self::Signaled {
                signal: libc::WTERMSIG(status),
                core_dumped: libc::WCOREDUMP(status),
            }
        } else if libc::WIFSTOPPED(status) {
            Self::Stopped {
                signal: libc::WSTOPSIG(status),
            }
        } else {
            Self::Unknown
        }
    }

    /// Short lowercase name of the category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Exited { .. } => "exited",
            Self::Signaled { .. } => "signaled",
            Self::Stopped { .. } => "stopped",
            Self::Unknown => "unknown",
        }
    }

    /// The terminating or stopping signal, if any.
    pub fn signal(&self) -> Option<i32> {
        match self {
            Self::Signaled { signal, .. } | Self::Stopped { signal } => Some(*signal),
            _ => None,
        }
    }
}

impl fmt::Display for WaitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited { code } => write!(f, "exited with code {code}"),
            Self::Signaled {
                signal,
                core_dumped: true,
            } => write!(f, "terminated by signal {signal} (Core Dumped)"),
            Self::Signaled { signal, .. } => write!(f, "terminated by signal {signal}"),
            Self::Stopped { signal } => write!(f, "stopped by signal {signal}"),
            Self::Unknown => Ok(()),
        }
    }
}

/// Describe a raw wait status in English, e.g. `exited with code 2`.
///
/// Returns an empty string when the status is neither exited, signaled nor
/// stopped.
pub fn decode(status: i32) -> String {
    WaitStatus::from_raw(status).to_string()
}
