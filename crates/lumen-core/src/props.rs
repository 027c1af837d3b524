//! Typed prop shapes for common accessible elements, and the shape check
//! callers use to narrow untyped props into them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether `value` is an object holding every key in `required` and an
/// `aria-<name>` key for every name in `required_aria`.
pub fn has_accessible_props(value: &Value, required: &[&str], required_aria: &[&str]) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let has_required = required.iter().all(|k| obj.contains_key(*k));
    let has_aria = required_aria
        .iter()
        .all(|name| obj.contains_key(&format!("aria-{name}")));
    has_required && has_aria
}

/// Narrow `value` into `T` when it passes [`has_accessible_props`] and
/// deserializes cleanly.
pub fn narrow_props<T: DeserializeOwned>(
    value: &Value,
    required: &[&str],
    required_aria: &[&str],
) -> Option<T> {
    if !has_accessible_props(value, required, required_aria) {
        return None;
    }
    T::deserialize(value).ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleImageProps {
    pub alt: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Event handlers are referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleButtonProps {
    #[serde(rename = "onClick")]
    pub on_click: String,
    #[serde(rename = "aria-label", default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleInputProps {
    pub id: String,
    #[serde(rename = "type")]
    pub input_type: String,
    #[serde(rename = "aria-label", default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(rename = "aria-describedby", default, skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleFormProps {
    #[serde(rename = "onSubmit")]
    pub on_submit: String,
    #[serde(rename = "aria-label", default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(rename = "aria-describedby", default, skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
    #[serde(rename = "noValidate", default)]
    pub no_validate: bool,
}

/// A select value is either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleSelectProps {
    pub id: String,
    pub value: SelectValue,
    #[serde(rename = "onChange")]
    pub on_change: String,
    #[serde(rename = "aria-label", default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(rename = "aria-describedby", default, skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableRole {
    Table,
    Grid,
    Treegrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleTableProps {
    #[serde(rename = "aria-label", default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(rename = "aria-describedby", default, skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<TableRole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogRole {
    Dialog,
    Alertdialog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleDialogProps {
    #[serde(rename = "aria-label")]
    pub aria_label: String,
    #[serde(rename = "aria-describedby", default, skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
    pub role: DialogRole,
    #[serde(rename = "aria-modal")]
    pub aria_modal: bool,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    #[serde(rename = "onClose")]
    pub on_close: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibleLinkProps {
    pub href: String,
    #[serde(rename = "aria-label", default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(rename = "onClick", default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
}
