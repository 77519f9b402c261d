//! HTTP method keys under path items.

use super::path_items;
use crate::models::Finding;
use serde_json::Value as Json;

pub const ID: &str = "http-methods";

/// Recognized operation keys. Matching is case-sensitive.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Path item keys that are not operations.
const STRUCTURAL_KEYS: [&str; 5] = ["parameters", "summary", "description", "servers", "$ref"];

pub fn is_method(key: &str) -> bool {
    HTTP_METHODS.contains(&key)
}

pub fn check(doc: &Json) -> Vec<Finding> {
    let mut out = Vec::new();
    for (route, item) in path_items(doc) {
        for key in item.keys() {
            if STRUCTURAL_KEYS.contains(&key.as_str()) || is_method(key) {
                continue;
            }
            out.push(Finding::error(
                ID,
                format!("paths.{route}.{key}"),
                format!("Invalid HTTP method: '{key}'"),
            ));
        }
    }
    out
}
