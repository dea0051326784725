//! logkeep CLI library module.
//!
//! - `cli/` - Command-line argument parsing
//! - `config` - Optional TOML settings merged with flags
//! - `logging` - stderr diagnostics via `tracing`
//! - `report` - The one-line `Error:` / `Unhandled Exception:` report

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use logkeep_core::{LogHandle, RotationOutcome};
use tracing::debug;

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;

pub use cli::{Cli, LogLevel};
pub use config::RotationConfig;
pub use report::Report;

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Open the target, evaluate the thresholds and rotate if needed.
pub fn run(cli: &Cli) -> Result<RotationOutcome, Report> {
    let config = RotationConfig::resolve(cli)?;
    debug!(?config, "Resolved rotation settings");

    let handle = LogHandle::open(&cli.log_file)?;
    let outcome = config
        .policy()
        .evaluate_and_rotate_to(&handle, config.backup_path.as_deref())?;
    Ok(outcome)
}

/// Report panics the same way as any other unexpected failure and exit
/// with a failure status.
pub fn install_panic_hook() {
    // Only install once
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    panic::set_hook(Box::new(|panic_info| {
        let panic_message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("Box<dyn Any>")
        };

        if let Some(location) = panic_info.location() {
            eprintln!(
                "Panic at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }

        let report = Report::Unhandled(format!("panic({panic_message:?})"));
        println!("{report}");
        std::process::exit(1);
    }));
}
