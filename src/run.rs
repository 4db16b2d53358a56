use crate::cmd;
use crate::exit_codes;
use crate::progress;
use crate::signals;
use crate::wait_status::decode;

/// The report line for a finished child: `<prog> (pid <pid>): <description>`.
///
/// A status that decodes to nothing is shown as `unknown status <raw>`.
pub fn report_line(prog: &str, pid: u32, status: i32) -> String {
    let desc = decode(status);
    if desc.is_empty() {
        format!("{prog} (pid {pid}): unknown status {status}")
    } else {
        format!("{prog} (pid {pid}): {desc}")
    }
}

/// Run `wstatus run`.
///
/// Returns the exit code that `main` should pass to `std::process::exit`:
/// the child's shell-style exit code, 127 if it could not be started, or 1 if
/// waiting on it failed.
pub fn run_run(command: &[String], quiet: bool) -> i32 {
    let Some((prog, args)) = command.split_first() else {
        eprintln!("No command given.");
        return exit_codes::USAGE_ERROR;
    };

    // Ctrl+C reaches the child through the shared process group; we stay alive to report it.
    let _interrupted = signals::interrupted_flag();

    let outcome = match cmd::run_wait(prog, args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    if !quiet {
        progress::step(&report_line(prog, outcome.pid, outcome.status));
    }
    cmd::shell_exit_code(outcome.status)
}
