//! CLI argument parsing.
//!
//! - `args` - Command-line argument structures
//! - `styles` - ANSI styling and help text

pub mod args;
pub mod styles;

pub use args::{Cli, LOG_LEVEL_ENV, LogLevel};
