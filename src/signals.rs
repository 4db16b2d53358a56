use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Conventional name of `signal` (e.g. `SIGSEGV`), or `None` if the platform
/// has no name for it.
pub fn signal_name(signal: i32) -> Option<&'static str> {
    signal_hook::low_level::signal_name(signal)
}

/// Register a SIGINT (Ctrl+C) handler and return the interrupted flag.
///
/// While `wstatus run` waits on its child, the first Ctrl+C only sets the flag:
/// the child shares our process group, receives the signal itself, and its
/// status is still reported.
///
/// A second Ctrl+C terminates the process immediately with exit code 130.
pub fn interrupted_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    if let Err(e) = register_interrupt(signal_hook::consts::SIGINT, &flag) {
        eprintln!("{e}");
    }
    flag
}

/// Install the two-stage handler for `signal` on `flag`.
fn register_interrupt(signal: i32, flag: &Arc<AtomicBool>) -> Result<(), String> {
    let failed = |e: std::io::Error| format!("Failed to install handler for signal {signal}: {e}");

    // Registered first: on signal, if the flag is already true (second Ctrl+C) → exit.
    signal_hook::flag::register_conditional_shutdown(
        signal,
        crate::exit_codes::INTERRUPTED,
        Arc::clone(flag),
    )
    .map_err(failed)?;

    // Registered second: on signal, set the flag to true (first Ctrl+C).
    signal_hook::flag::register(signal, Arc::clone(flag)).map_err(failed)?;
    Ok(())
}
