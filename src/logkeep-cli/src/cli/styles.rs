//! CLI styling and help text.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Help output theme.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Cyan.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// Long description shown by `--help`.
pub const LONG_ABOUT: &str = "Checks user defined thresholds (such as size or line count) \
to decide when to create backups and clear out logs.\n\n\
The log is copied to a backup and then truncated in place. \
Existing backups are overwritten with the latest.";

/// After-help section with configuration and environment documentation.
pub const AFTER_HELP: &str = color_print::cstr!(
    r#"<cyan,bold>EXAMPLES</>
    <green,bold>logkeep</> <dim>app.log --size_limit 10</>     Rotate once app.log exceeds 10 MB
    <green,bold>logkeep</> <dim>app.log --line_limit 5000</>   Rotate once app.log exceeds 5000 lines
    <green,bold>logkeep</> <dim>app.log -c logkeep.toml</>     Read thresholds from a config file

<cyan,bold>CONFIG FILE</>
    <yellow>size_limit</>     = 10.0        <dim># MB</>
    <yellow>line_limit</>     = 5000
    <yellow>backup_path</>    = "app.log.bak"

<cyan,bold>ENVIRONMENT VARIABLES</>
    <yellow>LOGKEEP_LOG_LEVEL</>    Log verbosity (error, warn, info, debug, trace)
    <yellow>RUST_LOG</>             Full tracing filter, overrides the log level"#
);
