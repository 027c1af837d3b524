//! Accessibility rule enforcement over UI component trees.
//!
//! Walks a [`Node`](lumen_core::types::Node) tree, threading a structural
//! context down from each node to its children, and runs an ordered rule
//! set at every node. Built-in rules:
//! - img-alt, aria-label, heading-order, button-role, form-label,
//!   color-contrast, link-text
//! - table-structure, landmarks, focus-management, live-regions,
//!   portal-management, loading-states, error-handling

pub mod types;
pub mod rule;
pub mod rules;
pub mod rules_extended;
pub mod options;
pub mod engine;

pub use engine::{evaluate, AuditEngine};
pub use options::AuditOptions;
pub use rule::{Rule, RuleFault, RuleSet};
pub use types::{AuditError, AuditResult, AuditSummary, ElementSnapshot, RuleInfo, Violation};
