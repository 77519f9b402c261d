//! Colored stderr prefixes and logging setup.

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the `-v` derived log filter.
pub const LOG_ENV: &str = "OASLINT_LOG";

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

pub fn error_prefix() -> String {
    if stderr_colors() {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if stderr_colors() {
        "Note:".cyan().bold().to_string()
    } else {
        "Note:".to_string()
    }
}

/// Filter directive for a `-v` count: warn, info, then debug.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install a stderr subscriber. `OASLINT_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
