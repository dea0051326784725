//! Command-line argument structures.

use clap::Parser;
use std::path::PathBuf;

use super::styles::{AFTER_HELP, LONG_ABOUT, get_styles};

/// Environment variable consulted for the log level when no flag overrides it.
pub const LOG_LEVEL_ENV: &str = "LOGKEEP_LOG_LEVEL";

/// Log verbosity level for diagnostics written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Also report backups and truncations
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Back up and clear a log file once it crosses a size or line threshold.
#[derive(Debug, Parser)]
#[command(name = "logkeep")]
#[command(author, version)]
#[command(about = "Back up and clear a log file once it crosses a threshold")]
#[command(long_about = LONG_ABOUT, styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    /// The target log file.
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// The maximum size (MB) the log may be before backup.
    #[arg(
        long = "size_limit",
        visible_alias = "size-limit",
        value_name = "MB",
        value_parser = parse_size_limit
    )]
    pub size_limit: Option<f64>,

    /// The maximum number of lines the log may have before backup.
    #[arg(long = "line_limit", visible_alias = "line-limit", value_name = "LINES")]
    pub line_limit: Option<u64>,

    /// Where to write the backup (default: <LOG_FILE>.prev).
    #[arg(long = "backup_path", visible_alias = "backup-path", value_name = "PATH")]
    pub backup_path: Option<PathBuf>,

    /// TOML file providing default thresholds; flags take precedence.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set log verbosity level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Enable debug logging (same as --log-level debug)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Enable trace logging (same as --log-level trace)
    #[arg(long)]
    pub trace: bool,
}

impl Cli {
    /// Effective log level: `--trace`, then `--verbose`, then the
    /// environment value, then `--log-level`.
    pub fn effective_log_level(&self, env_level: Option<&str>) -> LogLevel {
        if self.trace {
            LogLevel::Trace
        } else if self.verbose {
            LogLevel::Debug
        } else if let Some(level) = env_level.and_then(LogLevel::from_str_loose) {
            level
        } else {
            self.log_level
        }
    }
}

/// Megabyte thresholds must be finite and non-negative.
pub(crate) fn parse_size_limit(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    validate_size_limit(value)
}

pub(crate) fn validate_size_limit(value: f64) -> Result<f64, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "size limit must be a finite, non-negative number of megabytes, got {value}"
        ));
    }
    Ok(value)
}
