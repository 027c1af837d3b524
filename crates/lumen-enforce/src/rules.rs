//! Built-in accessibility rules.
//!
//! - img-alt: images need non-empty alt text
//! - aria-label: interactive elements need an accessible name
//! - heading-order: headings may only go one level deeper than their parent heading
//! - button-role: click handlers on non-buttons need `role="button"`
//! - form-label: form controls need an associated label
//! - color-contrast: explicit foreground/background pairs need review
//! - link-text: links need meaningful text
//!
//! The remaining rules live in [`crate::rules_extended`].

use lumen_core::context::Context;
use lumen_core::types::{Node, Severity, Tag};

use crate::rule::{Rule, RuleSet};
use crate::rules_extended;

/// Link texts that say nothing about the destination.
const VAGUE_LINK_TEXTS: &[&str] = &["click here", "here", "more", "read more"];

/// The default rule set, in evaluation order.
pub fn default_rules() -> RuleSet {
    let mut set = RuleSet::new();
    for rule in [
        img_alt(),
        aria_label(),
        heading_order(),
        button_role(),
        form_label(),
        color_contrast(),
        link_text(),
        rules_extended::table_structure(),
        rules_extended::landmarks(),
        rules_extended::focus_management(),
        rules_extended::live_regions(),
        rules_extended::portal_management(),
        rules_extended::loading_states(),
        rules_extended::error_handling(),
    ] {
        set.replace(rule);
    }
    set
}

/// Whether an input is named by a `label` sibling pointing at its `id`.
fn has_associated_label(node: &Node, cx: &Context) -> bool {
    node.tag() == Some(&Tag::Input)
        && node
            .props
            .str("id")
            .is_some_and(|id| !id.is_empty() && cx.is_label_target(id))
}

pub fn img_alt() -> Rule {
    Rule::new(
        "img-alt",
        "Images must have valid alt text",
        Severity::Error,
        |node| match node.tag() {
            Some(Tag::Img) => node.props.str("alt").is_some_and(|alt| !alt.is_empty()),
            _ => true,
        },
    )
}

pub fn aria_label() -> Rule {
    Rule::contextual(
        "aria-label",
        "Interactive elements should have aria-label when text content is not present",
        Severity::Warning,
        |node, cx| match node.tag() {
            Some(Tag::Button | Tag::A | Tag::Input) => {
                node.has_children()
                    || node.props.truthy("aria-label")
                    || node.props.truthy("aria-labelledby")
                    || has_associated_label(node, cx)
            }
            _ => true,
        },
    )
}

/// Outside any heading, `h1` and `h2` are both acceptable starting points.
pub fn heading_order() -> Rule {
    Rule::contextual(
        "heading-order",
        "Heading levels should only increase by one",
        Severity::Warning,
        |node, cx| match node.tag().and_then(Tag::heading_level) {
            Some(level) => level <= cx.level.max(1).saturating_add(1),
            None => true,
        },
    )
}

pub fn button_role() -> Rule {
    Rule::new(
        "button-role",
        "Elements with onClick handlers should have button role if not a button element",
        Severity::Error,
        |node| {
            if node.props.truthy("onClick") && node.tag() != Some(&Tag::Button) {
                node.props.str("role") == Some("button")
            } else {
                true
            }
        },
    )
}

pub fn form_label() -> Rule {
    Rule::contextual(
        "form-label",
        "Form controls must have associated labels",
        Severity::Error,
        |node, cx| match node.tag() {
            Some(Tag::Input | Tag::Select | Tag::Textarea) => {
                has_associated_label(node, cx)
                    || node.props.truthy("aria-labelledby")
                    || node.props.truthy("aria-label")
            }
            _ => true,
        },
    )
}

/// Flags elements that pin both colors. No ratio is computed.
pub fn color_contrast() -> Rule {
    Rule::new(
        "color-contrast",
        "Text elements should have sufficient color contrast",
        Severity::Warning,
        |node| {
            if !node.is_element() {
                return true;
            }
            match node.props.get("style") {
                Some(style) => {
                    let sets = |key: &str| style.get(key).is_some_and(|v| v.is_truthy());
                    !(sets("color") && sets("backgroundColor"))
                }
                None => true,
            }
        },
    )
}

pub fn link_text() -> Rule {
    Rule::new(
        "link-text",
        "Links must have meaningful text content",
        Severity::Error,
        |node| {
            if node.tag() != Some(&Tag::A) {
                return true;
            }
            let text = node
                .text_content()
                .or_else(|| node.props.str("aria-label"))
                .map(str::trim)
                .unwrap_or("");
            !text.is_empty() && !VAGUE_LINK_TEXTS.contains(&text.to_lowercase().as_str())
        },
    )
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
