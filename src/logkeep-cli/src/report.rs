//! Translation of failures into the single-line report printed to stdout.

use std::fmt;
use std::process::ExitCode;

use logkeep_core::LogError;

/// A failure as it is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A condition the user can act on (missing file, permissions, bad config).
    Error(String),
    /// Anything else, shown with its debug representation.
    Unhandled(String),
}

impl Report {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }

    pub fn message(&self) -> &str {
        match self {
            Report::Error(msg) | Report::Unhandled(msg) => msg,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Error(msg) => write!(f, "Error: {msg}"),
            Report::Unhandled(msg) => write!(f, "Unhandled Exception: {msg}"),
        }
    }
}

impl From<LogError> for Report {
    fn from(err: LogError) -> Self {
        if err.is_handled() {
            Report::Error(single_line(&err.to_string()))
        } else {
            Report::Unhandled(single_line(&format!("{err:?}")))
        }
    }
}

impl From<anyhow::Error> for Report {
    fn from(err: anyhow::Error) -> Self {
        Report::Error(single_line(&format!("{err:#}")))
    }
}

/// Collapse a possibly multi-line message onto one line.
fn single_line(msg: &str) -> String {
    msg.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_not_found_is_reported_as_error() {
        let report = Report::from(LogError::not_found("/some/path/to/log.log"));
        assert_eq!(
            report.to_string(),
            "Error: Could not locate a file at: /some/path/to/log.log"
        );
    }

    #[test]
    fn test_permission_denied_is_reported_as_error() {
        let report = Report::from(LogError::from_io(
            "/var/log/secure",
            io::Error::from(io::ErrorKind::PermissionDenied),
        ));
        assert_eq!(
            report.to_string(),
            "Error: Insufficient permissions to access file: /var/log/secure"
        );
    }

    #[test]
    fn test_unrecognised_io_error_is_unhandled() {
        let report = Report::from(LogError::from_io("app.log", io::Error::other("device busy")));
        assert!(matches!(report, Report::Unhandled(_)));
        let rendered = report.to_string();
        assert!(rendered.starts_with("Unhandled Exception: Io {"));
        assert!(rendered.contains("device busy"));
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_multi_line_messages_are_flattened() {
        let report = Report::from(anyhow::anyhow!("parse error at line 1\n  |\n1 | x = \n"));
        assert_eq!(report.message(), "parse error at line 1 | 1 | x =");
    }

    #[test]
    fn test_config_error_includes_context_chain() {
        let err = anyhow::anyhow!("unknown field `max_size`").context("invalid configuration");
        let report = Report::from(err);
        assert_eq!(
            report.to_string(),
            "Error: invalid configuration: unknown field `max_size`"
        );
    }
}
