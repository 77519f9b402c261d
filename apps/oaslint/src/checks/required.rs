//! Required top-level fields: `openapi`, `info.title`, `paths`.

use crate::document::{is_truthy, object_at};
use crate::models::Finding;
use serde_json::Value as Json;

pub const ID: &str = "required-fields";

const SUPPORTED_VERSIONS: [&str; 2] = ["3.0", "3.1"];

pub fn check(doc: &Json) -> Vec<Finding> {
    let mut out = Vec::new();

    match doc.get("openapi") {
        None => out.push(Finding::error(
            ID,
            "openapi",
            "Missing required 'openapi' version field",
        )),
        Some(v) => {
            let version = match v {
                Json::String(s) => s.clone(),
                other => other.to_string(),
            };
            if !SUPPORTED_VERSIONS.iter().any(|p| version.starts_with(p)) {
                out.push(Finding::error(
                    ID,
                    "openapi",
                    format!("Unsupported OpenAPI version: {version} (expected 3.0.x or 3.1.x)"),
                ));
            }
        }
    }

    match object_at(doc, "info") {
        None => out.push(Finding::error(ID, "info.title", "Missing required 'info' object")),
        Some(info) if !is_truthy(info.get("title")) => out.push(Finding::error(
            ID,
            "info.title",
            "Missing required 'info.title' field",
        )),
        Some(_) => {}
    }

    if doc.get("paths").is_none() {
        out.push(Finding::error(ID, "paths", "Missing required 'paths' object"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths_of(found: &[Finding]) -> Vec<&str> {
        found.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_complete_document_has_no_errors() {
        let doc = json!({"openapi": "3.0.3", "info": {"title": "Pets"}, "paths": {}});
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_empty_document_reports_each_field() {
        let found = check(&json!({}));
        assert_eq!(paths_of(&found), vec!["openapi", "info.title", "paths"]);
    }

    #[test]
    fn test_missing_title_reported_once() {
        let doc = json!({"openapi": "3.1.0", "info": {"version": "1"}, "paths": {}});
        let found = check(&doc);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "info.title");
        assert_eq!(found[0].message, "Missing required 'info.title' field");
    }

    #[test]
    fn test_empty_title_counts_as_missing() {
        let doc = json!({"openapi": "3.1.0", "info": {"title": ""}, "paths": {}});
        assert_eq!(paths_of(&check(&doc)), vec!["info.title"]);
    }

    #[test]
    fn test_non_object_info_reports_at_title() {
        let doc = json!({"openapi": "3.1.0", "info": "Pets", "paths": {}});
        let found = check(&doc);
        assert_eq!(paths_of(&found), vec!["info.title"]);
        assert_eq!(found[0].message, "Missing required 'info' object");
    }

    #[test]
    fn test_unsupported_version() {
        let doc = json!({"openapi": "2.0", "info": {"title": "t"}, "paths": {}});
        let found = check(&doc);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].message,
            "Unsupported OpenAPI version: 2.0 (expected 3.0.x or 3.1.x)"
        );
    }

    #[test]
    fn test_numeric_version_uses_json_text() {
        let doc = json!({"openapi": 3.1, "info": {"title": "t"}, "paths": {}});
        assert!(check(&doc).is_empty());
    }
}
