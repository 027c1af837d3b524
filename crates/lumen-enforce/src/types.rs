use serde::{Deserialize, Serialize};

use lumen_core::types::{Node, Props, Severity};

use crate::rule::RuleFault;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    pub passed: bool,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub rule_id: String,
    pub message: String,
    pub severity: Severity,
    pub element: ElementSnapshot,
    /// Child-node indices leading from the root to the offending node.
    pub path: Vec<usize>,
}

/// What a violation reports about the node it was raised on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    /// Tag name, or `Component` for composite components.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub props: Props,
}

impl ElementSnapshot {
    pub fn of(node: &Node) -> Self {
        let component = match &node.kind {
            lumen_core::types::NodeKind::Component(name) => Some(name.clone()),
            lumen_core::types::NodeKind::Element(_) => None,
        };
        Self {
            kind: node.kind.label().to_string(),
            component,
            props: node.props.clone(),
        }
    }
}

/// Violation counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl AuditResult {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }

    pub fn summary(&self) -> AuditSummary {
        let mut summary = AuditSummary::default();
        for v in &self.violations {
            match v.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.info += 1,
            }
        }
        summary
    }

    /// Whether any violation is at or above `threshold`.
    pub fn exceeds(&self, threshold: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= threshold)
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.rule_id.as_str())
    }
}

/// Metadata of one rule, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("rule '{rule_id}' failed on {kind}: {source}")]
    RuleFault {
        rule_id: String,
        kind: String,
        #[source]
        source: RuleFault,
    },

    #[error("duplicate rule id: {0}")]
    DuplicateRule(String),
}
