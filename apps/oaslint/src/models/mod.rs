//! Shared data models for lint results: findings, severities, and summary.

use serde::Serialize;

/// Exit status when no error-severity finding remains.
pub const EXIT_OK: i32 = 0;
/// Exit status when at least one error-severity finding remains.
pub const EXIT_FINDINGS: i32 = 1;
/// Exit status reserved for documents that could not be loaded.
pub const EXIT_LOAD_FAILURE: i32 = 2;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Severity of a finding.
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Strict-mode promotion: warnings become errors, errors stay errors.
    pub fn promote(self) -> Severity {
        Severity::Error
    }

    /// Upper-case tag used by the text renderer.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single lint finding with severity and location.
pub struct Finding {
    /// Id of the rule that produced the finding; not part of rendered output.
    #[serde(skip)]
    pub rule: &'static str,
    pub severity: Severity,
    pub path: String,
    pub message: String,
}

impl Finding {
    pub fn error(rule: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn warning(rule: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Aggregated counts used by printers and exit status.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Summary::default();
        for f in findings {
            match f.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
        }
        summary
    }
}

#[derive(Serialize, Debug, Clone)]
/// Lint results container.
pub struct LintResult {
    pub findings: Vec<Finding>,
    pub summary: Summary,
}

impl LintResult {
    /// Build a result from already-resolved findings.
    pub fn new(findings: Vec<Finding>) -> Self {
        let summary = Summary::from_findings(&findings);
        Self { findings, summary }
    }

    /// Process exit status for this result (never `EXIT_LOAD_FAILURE`).
    pub fn exit_code(&self) -> i32 {
        if self.summary.errors > 0 {
            EXIT_FINDINGS
        } else {
            EXIT_OK
        }
    }
}
