use crate::report::{AuditReport, RulesReport};
use crate::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_audit(&self, report: &AuditReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_rules(&self, report: &RulesReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}
