//! logkeep - back up and clear a log file once it crosses a threshold.
//!
//! Usage:
//!   logkeep [--size_limit MB] [--line_limit LINES] [--backup_path PATH] LOG_FILE

use std::process::ExitCode;

use clap::Parser;
use logkeep_cli::cli::{Cli, LOG_LEVEL_ENV};
use tracing::debug;

fn main() -> ExitCode {
    logkeep_cli::install_panic_hook();

    let cli = Cli::parse();

    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    logkeep_cli::logging::init_logging(cli.effective_log_level(env_level.as_deref()));

    match logkeep_cli::run(&cli) {
        Ok(outcome) => {
            debug!(?outcome, "Finished");
            ExitCode::SUCCESS
        }
        Err(report) => {
            println!("{report}");
            report.exit_code()
        }
    }
}
