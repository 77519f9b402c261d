//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "oaslint",
    version,
    about = "OpenAPI 3.x JSON linter",
    long_about = "oaslint — a small, fast linter for OpenAPI 3.0/3.1 documents in JSON.\n\nConfiguration precedence: CLI > oaslint.toml > defaults.",
    after_help = "Examples:\n  oaslint lint openapi.json\n  oaslint lint openapi.json --output json --strict\n  oaslint rules",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current oaslint version.")]
    Version,
    /// Lint an OpenAPI document
    #[command(
        about = "Run lint checks",
        long_about = "Validate an OpenAPI JSON document. Exits 1 when errors remain after strict-mode promotion, 2 when the file cannot be loaded.",
        after_help = "Examples:\n  oaslint lint openapi.json\n  oaslint lint openapi.json --format=json"
    )]
    Lint {
        #[arg(help = "Path to the OpenAPI JSON document")]
        file: String,
        #[arg(long, help = "Directory to search for oaslint.toml (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, visible_alias = "format", help = "Output mode: text|json (default: text)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Treat warnings as errors")]
        strict: bool,
    },
    /// List available rules
    #[command(
        about = "List rules",
        long_about = "List rule ids in the order they run, with default severity."
    )]
    Rules {
        #[arg(long, visible_alias = "format", help = "Output mode: text|json (default: text)")]
        output: Option<String>,
    },
}
