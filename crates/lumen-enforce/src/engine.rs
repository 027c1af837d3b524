use lumen_core::config::LumenConfig;
use lumen_core::context::Context;
use lumen_core::types::{Child, Node, Severity};
use tracing::{debug, trace};

use crate::options::AuditOptions;
use crate::types::{AuditError, AuditResult, ElementSnapshot, Violation};

/// Evaluate every non-ignored rule against `root` and all its descendant
/// nodes.
///
/// Violations come out in pre-order: a node's own violations in rule-set
/// order, then each child subtree in child order. Strict mode is applied
/// once, after the whole tree has been walked. The first rule fault aborts
/// the walk and is returned as the error.
pub fn evaluate(root: &Node, options: &AuditOptions) -> Result<AuditResult, AuditError> {
    let mut walker = Walker {
        options,
        path: Vec::new(),
        violations: Vec::new(),
        visited: 0,
    };
    walker.walk(root, &options.context)?;

    let Walker {
        mut violations,
        visited,
        ..
    } = walker;
    if options.strict_mode {
        for v in &mut violations {
            v.severity = Severity::Error;
        }
    }

    debug!(
        nodes = visited,
        rules = options.rule_set.len(),
        ignored = options.ignore_rules.len(),
        violations = violations.len(),
        strict = options.strict_mode,
        "evaluated tree"
    );
    Ok(AuditResult::new(violations))
}

/// Holds one set of options and evaluates any number of trees with them.
#[derive(Debug, Clone, Default)]
pub struct AuditEngine {
    options: AuditOptions,
}

impl AuditEngine {
    pub fn new(options: AuditOptions) -> Self {
        Self { options }
    }

    /// Create an engine configured from a `LumenConfig`.
    pub fn with_config(config: &LumenConfig) -> Self {
        Self::new(AuditOptions::from_config(config))
    }

    pub fn options(&self) -> &AuditOptions {
        &self.options
    }

    pub fn evaluate(&self, root: &Node) -> Result<AuditResult, AuditError> {
        evaluate(root, &self.options)
    }
}

struct Walker<'a> {
    options: &'a AuditOptions,
    path: Vec<usize>,
    violations: Vec<Violation>,
    visited: usize,
}

impl Walker<'_> {
    fn walk(&mut self, node: &Node, inherited: &Context) -> Result<(), AuditError> {
        self.visited += 1;
        let derived = inherited.derive(&node.kind);

        let options = self.options;
        for rule in options.rule_set.iter() {
            if options.is_ignored(&rule.id) {
                continue;
            }
            let compliant = rule
                .test(node, inherited)
                .map_err(|source| AuditError::RuleFault {
                    rule_id: rule.id.clone(),
                    kind: node.kind.to_string(),
                    source,
                })?;
            if !compliant {
                trace!(rule = %rule.id, kind = %node.kind, path = ?self.path, "rule failed");
                self.violations.push(Violation {
                    rule_id: rule.id.clone(),
                    message: options.message_for(&rule.id, &rule.description).to_string(),
                    severity: rule.severity,
                    element: ElementSnapshot::of(node),
                    path: self.path.clone(),
                });
            }
        }

        let child_cx = derived.for_children_of(node);
        for (i, child) in node.children.iter().enumerate() {
            if let Child::Node(child) = child {
                self.path.push(i);
                let walked = self.walk(child, &child_cx);
                self.path.pop();
                walked?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
