//! oaslint CLI binary entry point.
//! Delegates to modules for loading and linting and prints results.

use clap::Parser;
use oaslint::cli::{Cli, Commands};
use oaslint::lint::{run_lint, LintOptions};
use oaslint::output::{self, OutputFormat};
use oaslint::{config, document, utils};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Rules { output } => {
            let format = output
                .as_deref()
                .and_then(OutputFormat::parse)
                .unwrap_or_default();
            output::print_rules(format);
        }
        Commands::Lint {
            file,
            repo_root,
            output,
            strict,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                if strict { Some(true) } else { None },
            );
            for note in &eff.notes {
                eprintln!("{} {}", utils::note_prefix(), note);
            }

            // Load failures short-circuit before any rule runs
            let doc = match document::load_document(Path::new(&file)) {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(e.exit_code());
                }
            };

            let opts = LintOptions {
                strict: eff.strict,
                skip: eff.skip,
            };
            let result = run_lint(&doc, &opts);
            output::print_lint(&result, eff.output);
            std::process::exit(result.exit_code());
        }
    }
}
