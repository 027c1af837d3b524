//! Built-in rules for structure, landmarks, focus, and dynamic content:
//! - table-structure: tables need a `thead`
//! - landmarks: `role` values must be recognized
//! - focus-management: hidden elements must not stay in the tab order
//! - live-regions: alert/status/log regions need `aria-live`
//! - portal-management: dialogs need modal semantics, a label, and key handling
//! - loading-states: busy regions must announce progress
//! - error-handling: invalid fields must point at an error message
//!
//! These rules apply to plain elements only; composite components pass.

use lumen_core::types::{Node, PropValue, Severity, Tag};

use crate::rule::Rule;

/// Landmark names accepted as `role` values.
pub const LANDMARK_ROLES: &[&str] = &["main", "nav", "header", "footer", "aside"];

/// Non-landmark roles the other built-in rules check, and so accept.
const WIDGET_ROLES: &[&str] = &[
    "button",
    "dialog",
    "alertdialog",
    "alert",
    "status",
    "log",
    "progressbar",
    "table",
    "grid",
    "treegrid",
];

fn role(node: &Node) -> Option<&str> {
    node.props.str("role")
}

/// `true`, or the string `"true"` as plain HTML attributes spell it.
fn is_true(value: Option<&PropValue>) -> bool {
    match value {
        Some(PropValue::Bool(b)) => *b,
        Some(PropValue::Text(s)) => s == "true",
        _ => false,
    }
}

/// Whether a `tabIndex` keeps the element out of the tab order.
fn removed_from_tab_order(tab_index: Option<&PropValue>) -> bool {
    match tab_index {
        None | Some(PropValue::Null) => true,
        Some(PropValue::Number(n)) => *n < 0.0,
        Some(PropValue::Text(s)) => s.trim().parse::<f64>().is_ok_and(|n| n < 0.0),
        Some(_) => false,
    }
}

pub fn table_structure() -> Rule {
    Rule::new(
        "table-structure",
        "Tables must have proper header structure",
        Severity::Error,
        |node| {
            node.tag() != Some(&Tag::Table)
                || node.child_nodes().any(|c| c.tag() == Some(&Tag::Thead))
        },
    )
}

pub fn landmarks() -> Rule {
    Rule::new(
        "landmarks",
        "Page must have proper landmark structure",
        Severity::Warning,
        |node| {
            if !node.is_element() {
                return true;
            }
            match node.props.get("role") {
                Some(value) if value.is_truthy() => value
                    .as_str()
                    .is_some_and(|r| LANDMARK_ROLES.contains(&r) || WIDGET_ROLES.contains(&r)),
                _ => true,
            }
        },
    )
}

pub fn focus_management() -> Rule {
    Rule::new(
        "focus-management",
        "Components that show/hide content should manage focus appropriately",
        Severity::Error,
        |node| {
            if !node.is_element() {
                return true;
            }
            let style = node.props.get("style");
            let style_is = |key: &str, expected: &str| {
                style
                    .and_then(|s| s.get(key))
                    .and_then(PropValue::as_str)
                    == Some(expected)
            };
            let hidden = is_true(node.props.get("aria-hidden"))
                || style_is("display", "none")
                || style_is("visibility", "hidden");
            !hidden || removed_from_tab_order(node.props.get("tabIndex"))
        },
    )
}

pub fn live_regions() -> Rule {
    Rule::new(
        "live-regions",
        "Dynamic content updates should use ARIA live regions",
        Severity::Warning,
        |node| {
            if !node.is_element() {
                return true;
            }
            let dynamic = matches!(role(node), Some("alert" | "status" | "log"));
            !dynamic || node.props.truthy("aria-live")
        },
    )
}

pub fn portal_management() -> Rule {
    Rule::new(
        "portal-management",
        "Portals and modals should have proper focus trap and keyboard navigation",
        Severity::Error,
        |node| {
            if !node.is_element() || role(node) != Some("dialog") {
                return true;
            }
            node.props.truthy("aria-modal")
                && node.props.truthy("aria-label")
                && node.props.truthy("onKeyDown")
        },
    )
}

pub fn loading_states() -> Rule {
    Rule::new(
        "loading-states",
        "Async operations should indicate loading states accessibly",
        Severity::Warning,
        |node| {
            if !node.is_element() || !node.props.truthy("aria-busy") {
                return true;
            }
            let loading_region = matches!(role(node), Some("progressbar" | "status"));
            loading_region && node.props.truthy("aria-live")
        },
    )
}

pub fn error_handling() -> Rule {
    Rule::new(
        "error-handling",
        "Error states should be properly communicated to assistive technologies",
        Severity::Error,
        |node| {
            if !node.is_element() || !is_true(node.props.get("aria-invalid")) {
                return true;
            }
            node.props.truthy("aria-errormessage") || role(node) == Some("alert")
        },
    )
}
