use std::collections::{BTreeMap, BTreeSet};

use lumen_core::config::LumenConfig;
use lumen_core::context::Context;

use crate::rule::RuleSet;

/// Per-call evaluation options.
///
/// `AuditOptions::default()` is the effective default for every field, so
/// callers override only what they need:
///
/// ```
/// # use lumen_enforce::options::AuditOptions;
/// let opts = AuditOptions::default().strict().ignore("heading-order");
/// assert!(opts.strict_mode);
/// ```
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub rule_set: RuleSet,
    pub context: Context,
    pub strict_mode: bool,
    pub ignore_rules: BTreeSet<String>,
    pub custom_messages: BTreeMap<String, String>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::builtin(),
            context: Context::default(),
            strict_mode: false,
            ignore_rules: BTreeSet::new(),
            custom_messages: BTreeMap::new(),
        }
    }
}

impl AuditOptions {
    /// Options seeded from a loaded config, using the built-in rules.
    pub fn from_config(config: &LumenConfig) -> Self {
        Self {
            rule_set: RuleSet::builtin(),
            context: config.context.clone(),
            strict_mode: config.strict_mode,
            ignore_rules: config.ignore_rules.iter().cloned().collect(),
            custom_messages: config.custom_messages.clone(),
        }
    }

    pub fn with_rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = rule_set;
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    pub fn ignore(mut self, rule_id: &str) -> Self {
        self.ignore_rules.insert(rule_id.to_string());
        self
    }

    pub fn message(mut self, rule_id: &str, message: &str) -> Self {
        self.custom_messages
            .insert(rule_id.to_string(), message.to_string());
        self
    }

    pub fn is_ignored(&self, rule_id: &str) -> bool {
        self.ignore_rules.contains(rule_id)
    }

    /// The message reported for `rule_id`: the override if one is set,
    /// otherwise `default`.
    pub fn message_for<'a>(&'a self, rule_id: &str, default: &'a str) -> &'a str {
        self.custom_messages
            .get(rule_id)
            .map(String::as_str)
            .unwrap_or(default)
    }
}
