use std::fmt;
use std::sync::Arc;

use lumen_core::context::Context;
use lumen_core::types::{Node, Severity};

use crate::types::{AuditError, RuleInfo};

/// A failure raised by a rule predicate.
///
/// Rules are expected to be total over any node shape; a fault means the
/// rule itself is broken, and the evaluation that hit it is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RuleFault(pub String);

impl RuleFault {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// The test half of a rule. `Ok(true)` means the node is compliant.
///
/// `cx` is the context the node inherited from its parent, before the
/// node's own kind was applied.
pub trait Predicate: Send + Sync {
    fn test(&self, node: &Node, cx: &Context) -> Result<bool, RuleFault>;
}

struct NodeFn<F>(F);

impl<F> Predicate for NodeFn<F>
where
    F: Fn(&Node) -> bool + Send + Sync,
{
    fn test(&self, node: &Node, _cx: &Context) -> Result<bool, RuleFault> {
        Ok((self.0)(node))
    }
}

struct ContextFn<F>(F);

impl<F> Predicate for ContextFn<F>
where
    F: Fn(&Node, &Context) -> bool + Send + Sync,
{
    fn test(&self, node: &Node, cx: &Context) -> Result<bool, RuleFault> {
        Ok((self.0)(node, cx))
    }
}

struct FallibleFn<F>(F);

impl<F> Predicate for FallibleFn<F>
where
    F: Fn(&Node, &Context) -> Result<bool, RuleFault> + Send + Sync,
{
    fn test(&self, node: &Node, cx: &Context) -> Result<bool, RuleFault> {
        (self.0)(node, cx)
    }
}

/// An accessibility rule: identity, metadata, and a predicate.
#[derive(Clone)]
pub struct Rule {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    test: Arc<dyn Predicate>,
}

impl Rule {
    /// A rule that only looks at the node.
    pub fn new<F>(id: &str, description: &str, severity: Severity, test: F) -> Self
    where
        F: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(id, description, severity, Arc::new(NodeFn(test)))
    }

    /// A rule that also sees the context inherited from the parent.
    pub fn contextual<F>(id: &str, description: &str, severity: Severity, test: F) -> Self
    where
        F: Fn(&Node, &Context) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(id, description, severity, Arc::new(ContextFn(test)))
    }

    /// A rule whose predicate can fail.
    pub fn fallible<F>(id: &str, description: &str, severity: Severity, test: F) -> Self
    where
        F: Fn(&Node, &Context) -> Result<bool, RuleFault> + Send + Sync + 'static,
    {
        Self::from_predicate(id, description, severity, Arc::new(FallibleFn(test)))
    }

    pub fn from_predicate(
        id: &str,
        description: &str,
        severity: Severity,
        test: Arc<dyn Predicate>,
    ) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            severity,
            test,
        }
    }

    pub fn test(&self, node: &Node, cx: &Context) -> Result<bool, RuleFault> {
        self.test.test(node, cx)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of rules with unique ids. Insertion order is
/// evaluation order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in accessibility rules.
    pub fn builtin() -> Self {
        crate::rules::default_rules()
    }

    /// Build a set from rules in order, rejecting repeated ids.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self, AuditError> {
        let mut set = Self::new();
        for rule in rules {
            set.insert(rule)?;
        }
        Ok(set)
    }

    /// Append a rule. Fails if a rule with the same id is already present.
    pub fn insert(&mut self, rule: Rule) -> Result<(), AuditError> {
        if self.contains(&rule.id) {
            return Err(AuditError::DuplicateRule(rule.id));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Insert or override by id. An override keeps the original position.
    pub fn replace(&mut self, rule: Rule) -> Option<Rule> {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(slot) => Some(std::mem::replace(slot, rule)),
            None => {
                self.rules.push(rule);
                None
            }
        }
    }

    /// Layer `other` over this set: matching ids are overridden in place,
    /// new ids are appended in `other`'s order.
    pub fn extend_with(mut self, other: RuleSet) -> Self {
        for rule in other.rules {
            self.replace(rule);
        }
        self
    }

    pub fn remove(&mut self, id: &str) -> Option<Rule> {
        let idx = self.rules.iter().position(|r| r.id == id)?;
        Some(self.rules.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.id.as_str())
    }

    /// Rule metadata in evaluation order.
    pub fn describe(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id.clone(),
                description: r.description.clone(),
                severity: r.severity,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
