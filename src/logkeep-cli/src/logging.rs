//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr; stdout carries nothing but the failure report.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Filter directive for `level`, or `rust_log` verbatim when it is set.
pub fn filter_directive(level: LogLevel, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ => level.as_filter_str().to_string(),
    }
}

/// Install the global stderr subscriber. Later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(level, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
