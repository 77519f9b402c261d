//! Unused `components.schemas` entries.
//!
//! Usage is reference presence: any `$ref` to `#/components/schemas/<name>`
//! anywhere in the document marks `<name>` used, including references made
//! from schemas that are themselves unused. There is no reachability walk
//! from `paths`.
//!
//! A reference names the schema in the first pointer segment after
//! `#/components/schemas/`, so `#/components/schemas/Foo/properties/x` marks
//! `Foo` used, not `x`. References into other component kinds or external
//! files mark nothing.

use crate::document::object_at;
use crate::models::Finding;
use serde_json::Value as Json;
use std::collections::HashSet;

pub const ID: &str = "unused-schemas";

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

pub fn check(doc: &Json) -> Vec<Finding> {
    let Some(schemas) = doc.get("components").and_then(|c| object_at(c, "schemas")) else {
        return Vec::new();
    };
    if schemas.is_empty() {
        return Vec::new();
    }

    let mut refs = HashSet::new();
    collect_schema_refs(doc, &mut refs);

    schemas
        .keys()
        .filter(|name| !refs.contains(name.as_str()))
        .map(|name| {
            Finding::warning(
                ID,
                format!("components.schemas.{name}"),
                format!("Schema '{name}' is defined but never referenced"),
            )
        })
        .collect()
}

/// Collect the schema names targeted by every `$ref` under `v`.
pub fn collect_schema_refs(v: &Json, refs: &mut HashSet<String>) {
    match v {
        Json::Object(obj) => {
            if let Some(Json::String(target)) = obj.get("$ref") {
                if let Some(name) = schema_name(target) {
                    refs.insert(name);
                }
            }
            for child in obj.values() {
                collect_schema_refs(child, refs);
            }
        }
        Json::Array(items) => {
            for child in items {
                collect_schema_refs(child, refs);
            }
        }
        _ => {}
    }
}

/// `#/components/schemas/Foo/properties/x` → `Foo`, with pointer escapes decoded.
fn schema_name(target: &str) -> Option<String> {
    let rest = target.strip_prefix(SCHEMA_REF_PREFIX)?;
    let segment = rest.split('/').next().filter(|s| !s.is_empty())?;
    Some(segment.replace("~1", "/").replace("~0", "~"))
}
