use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::signals::signal_name;
use crate::wait_status::WaitStatus;

/// Output format for `wstatus decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One description per line (default)
    #[default]
    Text,
    /// A YAML sequence of decoded records
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!(
                "Invalid output format '{}'. Must be one of: text, yaml",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// A decoded status as it appears in YAML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    /// The raw status value as given.
    pub status: i32,
    /// `exited`, `signaled`, `stopped` or `unknown`.
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_dumped: Option<bool>,
    pub description: String,
}

impl StatusRecord {
    pub fn new(status: i32) -> Self {
        let decoded = WaitStatus::from_raw(status);
        let code = match decoded {
            WaitStatus::Exited { code } => Some(code),
            _ => None,
        };
        let core_dumped = match decoded {
            WaitStatus::Signaled { core_dumped, .. } => Some(core_dumped),
            _ => None,
        };
        let signal = decoded.signal();
        Self {
            status,
            kind: decoded.kind(),
            code,
            signal,
            signal_name: signal.and_then(signal_name),
            core_dumped,
            description: decoded.to_string(),
        }
    }
}

/// Format statuses as text, one description per line.
///
/// With `show_raw`, each line is prefixed with `<status>: `.
pub fn format_text(statuses: &[i32], show_raw: bool) -> String {
    statuses
        .iter()
        .map(|&status| {
            let desc = WaitStatus::from_raw(status).to_string();
            if show_raw {
                format!("{status}: {desc}")
            } else {
                desc
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format statuses as a YAML sequence of [`StatusRecord`]s.
pub fn format_yaml(statuses: &[i32]) -> Result<String, String> {
    let records: Vec<StatusRecord> = statuses.iter().map(|&s| StatusRecord::new(s)).collect();
    serde_yaml::to_string(&records).map_err(|e| format!("Failed to serialize statuses: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- OutputFormat ---

    #[test]
    fn parse_format_case_insensitive() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn parse_format_invalid_lists_choices() {
        let err = "json".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("'json'"), "got: {err}");
        assert!(err.contains("text, yaml"), "got: {err}");
    }

    #[test]
    fn format_display_round_trips() {
        for f in [OutputFormat::Text, OutputFormat::Yaml] {
            assert_eq!(f.to_string().parse::<OutputFormat>().unwrap(), f);
        }
    }

    #[test]
    fn format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    // --- StatusRecord ---

    #[test]
    fn record_exited() {
        let r = StatusRecord::new(0x200);
        assert_eq!(r.kind, "exited");
        assert_eq!(r.code, Some(2));
        assert_eq!(r.signal, None);
        assert_eq!(r.core_dumped, None);
        assert_eq!(r.description, "exited with code 2");
    }

    #[test]
    fn record_signaled_with_core() {
        let r = StatusRecord::new(libc::SIGSEGV | 0x80);
        assert_eq!(r.kind, "signaled");
        assert_eq!(r.signal, Some(libc::SIGSEGV));
        assert_eq!(r.signal_name, Some("SIGSEGV"));
        assert_eq!(r.core_dumped, Some(true));
        assert_eq!(r.description, "terminated by signal 11 (Core Dumped)");
    }

    // --- format_text ---

    #[test]
    fn text_one_line_per_status() {
        let out = format_text(&[0x200, 9], false);
        assert_eq!(out, "exited with code 2\nterminated by signal 9");
    }

    #[test]
    fn text_show_raw_prefixes_status() {
        let out = format_text(&[0x200], true);
        assert_eq!(out, "512: exited with code 2");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn text_unknown_status_is_blank_line() {
        assert_eq!(format_text(&[0xffff, 0], false), "\nexited with code 0");
    }

    // --- format_yaml ---

    #[test]
    fn yaml_contains_record_fields() {
        let out = format_yaml(&[libc::SIGTERM]).unwrap();
        assert!(out.contains("kind: signaled"), "got: {out}");
        assert!(out.contains("signal_name: SIGTERM"), "got: {out}");
        assert!(out.contains("core_dumped: false"), "got: {out}");
        assert!(out.contains("description: terminated by signal 15"), "got: {out}");
    }

    #[test]
    fn yaml_omits_absent_fields() {
        let out = format_yaml(&[0]).unwrap();
        assert!(out.contains("code: 0"), "got: {out}");
        assert!(!out.contains("signal"), "got: {out}");
        assert!(!out.contains("core_dumped"), "got: {out}");
    }
}
