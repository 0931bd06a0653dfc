//! Shape validation for untrusted mind-map values
//!
//! Accepts `{ "idea": string, "nodes": [node] }` where every node is
//! `{ "id": positive integer, "title": non-empty string, "children": [node] }`.
//! Unknown fields are ignored.

use crate::error::ValidationError;
use crate::model::{MindMap, MindMapNode};
use serde_json::{Map, Value};

const ROOT: &str = "$";

/// Validate a JSON value and convert it into a typed mind map
///
/// # Errors
/// Returns the first [`ValidationError`] found, walking nodes in pre-order.
pub fn validate_mind_map(value: &Value) -> Result<MindMap, ValidationError> {
    let object = as_object(value, ROOT)?;
    let idea = string_field(object, ROOT, "idea")?;
    let nodes = node_list(object, ROOT, "nodes")?;
    Ok(MindMap::new(idea, nodes))
}

/// Validate a single node value (and its subtree)
///
/// # Errors
/// Returns the first [`ValidationError`] found in the subtree.
pub fn validate_node(value: &Value) -> Result<MindMapNode, ValidationError> {
    node_at(value, ROOT.to_owned())
}

fn node_at(value: &Value, path: String) -> Result<MindMapNode, ValidationError> {
    let object = as_object(value, &path)?;

    let id = match object.get("id") {
        None => {
            return Err(ValidationError::MissingField { path, field: "id" });
        }
        Some(raw) => match raw.as_u64() {
            Some(id) if id > 0 => id,
            _ if raw.is_number() => {
                return Err(ValidationError::InvalidId {
                    path: format!("{path}.id"),
                });
            }
            _ => {
                return Err(ValidationError::WrongType {
                    path: format!("{path}.id"),
                    expected: "a number",
                });
            }
        },
    };

    let title = string_field(object, &path, "title")?;
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle {
            path: format!("{path}.title"),
        });
    }

    let children = node_list(object, &path, "children")?;
    Ok(MindMapNode::new(id, title, children))
}

fn node_list(
    object: &Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<Vec<MindMapNode>, ValidationError> {
    array_field(object, path, field)?
        .iter()
        .enumerate()
        .map(|(index, item)| node_at(item, format!("{path}.{field}[{index}]")))
        .collect()
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::NotAnObject {
        path: path.to_owned(),
    })
}

fn string_field<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::MissingField {
            path: path.to_owned(),
            field,
        }),
        Some(value) => value.as_str().ok_or_else(|| ValidationError::WrongType {
            path: format!("{path}.{field}"),
            expected: "a string",
        }),
    }
}

fn array_field<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<&'a Vec<Value>, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::MissingField {
            path: path.to_owned(),
            field,
        }),
        Some(value) => value.as_array().ok_or_else(|| ValidationError::WrongType {
            path: format!("{path}.{field}"),
            expected: "an array",
        }),
    }
}
