//! Rule registry and runner.
//!
//! Each rule is a pure function over the document returning its findings in
//! document order. `RULES` fixes the registration order, which is also the
//! order findings are reported in.

mod descriptions;
mod methods;
mod naming;
mod required;
mod schemas;

use crate::document::object_at;
use crate::models::{Finding, Severity};
use rayon::prelude::*;
use serde_json::{Map, Value as Json};

/// A registered rule.
pub struct Rule {
    pub id: &'static str,
    /// Severity the rule reports at before strict-mode promotion.
    pub severity: Severity,
    pub description: &'static str,
    pub check: fn(&Json) -> Vec<Finding>,
}

/// All rules in registration order.
pub static RULES: &[Rule] = &[
    Rule {
        id: required::ID,
        severity: Severity::Error,
        description: "openapi, info.title and paths must be present; openapi must be 3.0.x or 3.1.x",
        check: required::check,
    },
    Rule {
        id: methods::ID,
        severity: Severity::Error,
        description: "path item keys must be lower-case HTTP methods or structural keys",
        check: methods::check,
    },
    Rule {
        id: descriptions::ID,
        severity: Severity::Warning,
        description: "info, operations and responses should carry a description",
        check: descriptions::check,
    },
    Rule {
        id: naming::ID,
        severity: Severity::Warning,
        description: "path segments should not mix camelCase and snake_case",
        check: naming::check,
    },
    Rule {
        id: schemas::ID,
        severity: Severity::Warning,
        description: "every components.schemas entry should be referenced by some $ref",
        check: schemas::check,
    },
];

/// Look up a rule by id.
pub fn find_rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}

/// Run every rule not listed in `skip`, concatenating findings in
/// registration order.
///
/// Rules are evaluated in parallel; the indexed collect keeps their order.
pub fn run_checks(doc: &Json, skip: &[String]) -> Vec<Finding> {
    let per_rule: Vec<Vec<Finding>> = RULES
        .par_iter()
        .map(|rule| {
            if skip.iter().any(|s| s == rule.id) {
                tracing::debug!(rule = rule.id, "skipped");
                return Vec::new();
            }
            let found = (rule.check)(doc);
            tracing::debug!(rule = rule.id, findings = found.len(), "rule finished");
            found
        })
        .collect();
    per_rule.into_iter().flatten().collect()
}

/// Object-valued path items under `paths`, in declaration order.
pub(crate) fn path_items(doc: &Json) -> impl Iterator<Item = (&String, &Map<String, Json>)> {
    object_at(doc, "paths")
        .into_iter()
        .flat_map(|paths| paths.iter())
        .filter_map(|(route, item)| item.as_object().map(|obj| (route, obj)))
}
