//! Document loading and shape helpers.
//!
//! The document is a `serde_json::Value` decoded with `preserve_order`, so
//! object iteration follows the order keys appear in the source file. Checkers
//! read it through the small helpers below, which treat any unexpected shape
//! as absence.

use crate::models::EXIT_LOAD_FAILURE;
use serde_json::{Map, Value as Json};
use std::fs;
use std::io;
use std::path::Path;

/// Failure to turn a file into a document. Never reported as a finding.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Cannot read file: {0}")]
    Read(#[source] io::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("OpenAPI spec must be a JSON object")]
    NotAnObject,
}

impl LoadError {
    pub fn exit_code(&self) -> i32 {
        EXIT_LOAD_FAILURE
    }
}

/// Read and decode the document at `path`.
pub fn load_document(path: &Path) -> Result<Json, LoadError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_string_lossy().to_string(),
        },
        _ => LoadError::Read(e),
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read document");
    parse_document(&raw)
}

/// Decode a document from JSON text. The root must be an object.
pub fn parse_document(raw: &str) -> Result<Json, LoadError> {
    let doc: Json = serde_json::from_str(raw).map_err(LoadError::InvalidJson)?;
    if !doc.is_object() {
        return Err(LoadError::NotAnObject);
    }
    Ok(doc)
}

/// Object-valued member `key` of `v`, if `v` is an object holding one.
pub fn object_at<'a>(v: &'a Json, key: &str) -> Option<&'a Map<String, Json>> {
    v.get(key).and_then(Json::as_object)
}

/// Whether a value counts as "present" for description/title checks.
///
/// Null, false, zero, empty strings, and empty containers do not.
pub fn is_truthy(v: Option<&Json>) -> bool {
    match v {
        None | Some(Json::Null) => false,
        Some(Json::Bool(b)) => *b,
        Some(Json::Number(n)) => n.as_f64().map(|x| x != 0.0).unwrap_or(true),
        Some(Json::String(s)) => !s.is_empty(),
        Some(Json::Array(a)) => !a.is_empty(),
        Some(Json::Object(o)) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_document(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().starts_with("File not found: "));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.json");
        fs::write(&p, "{ \"openapi\": ").unwrap();
        let err = load_document(&p).unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        assert!(matches!(parse_document("[1, 2]"), Err(LoadError::NotAnObject)));
        assert!(matches!(parse_document("\"x\""), Err(LoadError::NotAnObject)));
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let doc = parse_document(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!([]))));
        assert!(!is_truthy(Some(&json!({}))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!("Pets"))));
        assert!(is_truthy(Some(&json!(1))));
    }

    #[test]
    fn test_object_at_ignores_wrong_shape() {
        let doc = json!({"info": "not an object", "paths": {}});
        assert!(object_at(&doc, "info").is_none());
        assert!(object_at(&doc, "paths").is_some());
        assert!(object_at(&doc, "missing").is_none());
    }
}
