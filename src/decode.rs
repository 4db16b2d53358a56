use crate::exit_codes;
use crate::format::{OutputFormat, format_text, format_yaml};
use crate::parse::parse_status;

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "WSTATUS_FORMAT";

/// Pick the output format: the flag wins, then `env_value`, then text.
pub fn resolve_format(flag: Option<&str>, env_value: Option<&str>) -> Result<OutputFormat, String> {
    match flag.or(env_value) {
        Some(s) => s.parse(),
        None => Ok(OutputFormat::default()),
    }
}

/// Parse every status, failing on the first bad one.
pub fn parse_all(statuses: &[String]) -> Result<Vec<i32>, String> {
    statuses.iter().map(|s| parse_status(s)).collect()
}

/// Run `wstatus decode`.
///
/// Returns the exit code that `main` should pass to `std::process::exit`.
pub fn run_decode(format: Option<String>, show_raw: bool, statuses: &[String]) -> i32 {
    let env_format = std::env::var(FORMAT_ENV).ok();
    let format = match resolve_format(format.as_deref(), env_format.as_deref()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            return exit_codes::USAGE_ERROR;
        }
    };

    let values = match parse_all(statuses) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return exit_codes::USAGE_ERROR;
        }
    };

    match format {
        OutputFormat::Text => println!("{}", format_text(&values, show_raw)),
        OutputFormat::Yaml => match format_yaml(&values) {
            Ok(out) => print!("{out}"),
            Err(e) => {
                eprintln!("{e}");
                return exit_codes::RUNTIME_ERROR;
            }
        },
    }
    exit_codes::SUCCESS
}
