//! Structural context threaded from a node down to its descendants.
//!
//! A [`Context`] is a plain value. Every node derives its own copy from the
//! context it inherited, so updates made on one branch are never visible to
//! a sibling branch.

use serde::{Deserialize, Serialize};

use crate::types::{Node, NodeKind, Tag};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Level of the nearest enclosing heading; 0 outside any heading.
    pub level: u8,
    pub in_landmark: bool,
    pub in_interactive_element: bool,
    /// `htmlFor` targets of `label` elements among the node's siblings.
    /// Replaced at every level rather than accumulated.
    #[serde(skip)]
    pub label_targets: Vec<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// The context a node of `kind` establishes for itself, given the
    /// context it inherited.
    ///
    /// Heading levels overwrite, landmark and interactive flags only ever
    /// turn on. Components and unrecognized tags leave everything as is.
    pub fn derive(&self, kind: &NodeKind) -> Context {
        let mut next = self.clone();
        if let NodeKind::Element(tag) = kind {
            if let Some(level) = tag.heading_level() {
                next.level = level;
            }
            if tag.is_landmark() {
                next.in_landmark = true;
            }
            if tag.is_interactive() {
                next.in_interactive_element = true;
            }
        }
        next
    }

    /// The context handed to each child of `parent`, where `self` is the
    /// context `parent` derived for itself.
    pub fn for_children_of(&self, parent: &Node) -> Context {
        let mut next = self.clone();
        next.label_targets = parent
            .child_nodes()
            .filter(|n| n.tag() == Some(&Tag::Label))
            .filter_map(|n| n.props.str("htmlFor"))
            .map(str::to_string)
            .collect();
        next
    }

    pub fn is_label_target(&self, id: &str) -> bool {
        self.label_targets.iter().any(|t| t == id)
    }
}
