use serde::Serialize;

use lumen_enforce::rule::RuleSet;
use lumen_enforce::types::{AuditResult, AuditSummary, RuleInfo, Violation};

/// Result of `lumen check` on one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub version: String,
    pub command: String,
    /// Where the audited tree came from, usually a file path.
    pub source: String,
    pub passed: bool,
    pub summary: AuditSummary,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    pub fn new(source: impl Into<String>, result: &AuditResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").into(),
            command: "check".into(),
            source: source.into(),
            passed: result.passed,
            summary: result.summary(),
            violations: result.violations.clone(),
        }
    }
}

/// Result of `lumen rules`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulesReport {
    pub version: String,
    pub command: String,
    pub rules: Vec<RuleInfo>,
}

impl RulesReport {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").into(),
            command: "rules".into(),
            rules: rules.describe(),
        }
    }
}
