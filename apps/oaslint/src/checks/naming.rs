//! Document-wide path naming consistency.
//!
//! Segments are bucketed as camelCase or snake_case; all-lowercase segments
//! count toward neither. `{param}` placeholders are removed before a segment
//! is classified, wherever they sit in it. A single warning is
//! raised when both buckets are non-empty.

use crate::document::object_at;
use crate::models::Finding;
use regex::Regex;
use serde_json::Value as Json;
use std::sync::LazyLock;

pub const ID: &str = "path-naming";

static CAMEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][^_]*[A-Z][^_]*$").expect("valid"));
static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("valid"));
static SNAKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^A-Z]*_[^A-Z]*$").expect("valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Camel,
    Snake,
    Neutral,
}

pub fn classify(segment: &str) -> Casing {
    let segment = PARAM_RE.replace_all(segment, "");
    let segment = segment.as_ref();
    if segment.is_empty() {
        Casing::Neutral
    } else if CAMEL_RE.is_match(segment) {
        Casing::Camel
    } else if SNAKE_RE.is_match(segment) {
        Casing::Snake
    } else {
        Casing::Neutral
    }
}

pub fn check(doc: &Json) -> Vec<Finding> {
    let Some(paths) = object_at(doc, "paths") else {
        return Vec::new();
    };
    let mut camel = false;
    let mut snake = false;
    for route in paths.keys() {
        for seg in route.split('/') {
            match classify(seg) {
                Casing::Camel => camel = true,
                Casing::Snake => snake = true,
                Casing::Neutral => {}
            }
        }
        if camel && snake {
            return vec![Finding::warning(
                ID,
                "paths",
                "Inconsistent path naming: mix of camelCase and snake_case detected",
            )];
        }
    }
    Vec::new()
}
