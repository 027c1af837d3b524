//! Output formatters for lumen command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Compiler-style diagnostics for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;
pub mod report;

pub use report::{AuditReport, RulesReport};

pub trait OutputFormatter {
    fn format_audit(&self, report: &AuditReport) -> String;
    fn format_rules(&self, report: &RulesReport) -> String;
}
