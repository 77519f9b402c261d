//! Description completeness for info, operations, and responses.

use super::methods::is_method;
use super::path_items;
use crate::document::{is_truthy, object_at};
use crate::models::Finding;
use serde_json::Value as Json;

pub const ID: &str = "descriptions";

pub fn check(doc: &Json) -> Vec<Finding> {
    let mut out = Vec::new();

    let info_description = object_at(doc, "info").and_then(|info| info.get("description"));
    if !is_truthy(info_description) {
        out.push(Finding::warning(ID, "info.description", "Missing 'info.description'"));
    }

    for (route, item) in path_items(doc) {
        for (method, op) in item.iter() {
            if !is_method(method) {
                continue;
            }
            let Some(op) = op.as_object() else { continue };
            let op_path = format!("paths.{route}.{method}");

            if !is_truthy(op.get("summary")) && !is_truthy(op.get("description")) {
                out.push(Finding::warning(
                    ID,
                    op_path.clone(),
                    "Operation is missing both 'summary' and 'description'",
                ));
            }

            let Some(responses) = op.get("responses").and_then(Json::as_object) else {
                continue;
            };
            for (code, resp) in responses {
                let Some(resp) = resp.as_object() else { continue };
                if !is_truthy(resp.get("description")) {
                    out.push(Finding::warning(
                        ID,
                        format!("{op_path}.responses.{code}"),
                        "Response is missing 'description'",
                    ));
                }
            }
        }
    }

    out
}
