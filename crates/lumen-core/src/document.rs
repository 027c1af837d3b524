//! JSON tree documents.
//!
//! An element is an object with a `type` (tag name) or a `component`
//! (composite component name), optional `props`, and optional `children`:
//!
//! ```json
//! { "type": "figure", "children": [
//!     { "type": "img", "props": { "src": "cat.png", "alt": "A cat" } },
//!     "A caption"
//! ] }
//! ```
//!
//! String children become text. Any other child that is not an element
//! object is kept as an opaque value, which the engine skips.

use std::path::Path;

use serde_json::Value;

use crate::types::{Child, DocumentError, Node, NodeKind, PropValue, Props};

/// Parse a document from JSON text.
pub fn parse_document(src: &str) -> Result<Node, DocumentError> {
    let value: Value = serde_json::from_str(src)?;
    node_from_value(&value)
}

/// Read and parse a document file.
pub fn load_document(path: &Path) -> Result<Node, DocumentError> {
    let src = std::fs::read_to_string(path)?;
    parse_document(&src)
}

/// Convert an already-parsed JSON value. The value itself must be an element.
pub fn node_from_value(value: &Value) -> Result<Node, DocumentError> {
    convert(value, "$")
}

fn element_kind(value: &Value) -> Option<NodeKind> {
    let obj = value.as_object()?;
    if let Some(tag) = obj.get("type").and_then(Value::as_str) {
        return Some(NodeKind::element(tag));
    }
    obj.get("component")
        .and_then(Value::as_str)
        .map(|name| NodeKind::Component(name.to_string()))
}

fn convert(value: &Value, path: &str) -> Result<Node, DocumentError> {
    let kind = element_kind(value).ok_or_else(|| DocumentError::NotAnElement {
        path: path.to_string(),
    })?;

    let props = match value.get("props") {
        None | Some(Value::Null) => Props::new(),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| (k.clone(), PropValue::from_json(k, v)))
            .collect(),
        Some(_) => {
            return Err(DocumentError::InvalidProps {
                path: path.to_string(),
            })
        }
    };

    let raw_children: &[Value] = match value.get("children") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items,
        Some(single) => std::slice::from_ref(single),
    };

    let mut children = Vec::with_capacity(raw_children.len());
    for (i, raw) in raw_children.iter().enumerate() {
        let child = match raw {
            Value::String(text) => Child::Text(text.clone()),
            other if element_kind(other).is_some() => {
                Child::Node(convert(other, &format!("{path}.children[{i}]"))?)
            }
            other => Child::Opaque(PropValue::from_json("", other)),
        };
        children.push(child);
    }

    Ok(Node {
        kind,
        props,
        children,
    })
}
