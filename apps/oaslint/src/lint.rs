//! Lint runner: rule execution, strict-mode resolution, and summary.
//!
//! Produces a `LintResult` with findings and a summary. Strict mode is a
//! post-processing pass over the collected findings; rules never see it.

use crate::checks::run_checks;
use crate::models::{Finding, LintResult};
use serde_json::Value as Json;

#[derive(Debug, Clone, Default)]
/// Options that shape a single lint run.
pub struct LintOptions {
    /// Promote every warning to an error before summarizing.
    pub strict: bool,
    /// Rule ids that are not run.
    pub skip: Vec<String>,
}

/// Run all enabled rules against `doc` and summarize.
///
/// Severity accounting happens after strict-mode promotion, so with
/// `strict = true` the summary never reports warnings.
pub fn run_lint(doc: &Json, opts: &LintOptions) -> LintResult {
    let findings = run_checks(doc, &opts.skip);
    let findings = resolve_severity(findings, opts.strict);
    let result = LintResult::new(findings);
    tracing::info!(
        errors = result.summary.errors,
        warnings = result.summary.warnings,
        strict = opts.strict,
        "lint finished"
    );
    result
}

/// Apply strict-mode promotion. Identity when `strict` is false.
pub fn resolve_severity(findings: Vec<Finding>, strict: bool) -> Vec<Finding> {
    if !strict {
        return findings;
    }
    findings
        .into_iter()
        .map(|f| Finding {
            severity: f.severity.promote(),
            ..f
        })
        .collect()
}
