//! Output rendering for lint results.
//!
//! Supports `text` (default) and `json` outputs. The JSON form includes
//! per-finding fields and a top-level summary.

use crate::checks::RULES;
use crate::models::{LintResult, Severity};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Output mode selected by `--output` or config.
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a mode name; `human` is accepted as a synonym for `text`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" | "human" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

fn use_colors(format: OutputFormat) -> bool {
    format != OutputFormat::Json
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(res)).unwrap()
        ),
        OutputFormat::Text => print!("{}", render_text(res, use_colors(format))),
    }
}

/// Render the text report. Colors wrap tags only; the characters are the
/// same with or without them.
pub fn render_text(res: &LintResult, color: bool) -> String {
    if res.findings.is_empty() {
        return "No issues found.\n".to_string();
    }
    let mut out = String::new();
    for f in &res.findings {
        let tag = format!("[{}]", f.severity.tag());
        let tag = if color {
            match f.severity {
                Severity::Error => tag.red().bold().to_string(),
                Severity::Warning => tag.yellow().bold().to_string(),
            }
        } else {
            tag
        };
        out.push_str(&format!("{} {}: {}\n", tag, f.path, f.message));
    }
    let summary = format!(
        "Summary: {} error(s), {} warning(s)",
        res.summary.errors, res.summary.warnings
    );
    out.push('\n');
    if color {
        out.push_str(&summary.bold().to_string());
    } else {
        out.push_str(&summary);
    }
    out.push('\n');
    out
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    // Directly serialize LintResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}

/// Print the rule registry for `oaslint rules`.
pub fn print_rules(format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let items: Vec<_> = RULES
                .iter()
                .map(|r| {
                    json!({
                        "id": r.id,
                        "severity": r.severity,
                        "description": r.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json!({ "rules": items })).unwrap());
        }
        OutputFormat::Text => {
            let color = use_colors(format);
            for r in RULES {
                let id = if color {
                    r.id.bold().to_string()
                } else {
                    r.id.to_string()
                };
                println!("{:<8} {} — {}", r.severity.tag(), id, r.description);
            }
        }
    }
}
