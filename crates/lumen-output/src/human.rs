use crate::human_helpers::format_violation_human;
use crate::report::{AuditReport, RulesReport};
use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_audit(&self, report: &AuditReport) -> String {
        if report.violations.is_empty() {
            return String::new(); // Clean audit = empty stdout
        }

        let mut out = String::new();
        for v in &report.violations {
            out.push_str(&format_violation_human(v, &report.source));
        }

        let s = &report.summary;
        out.push_str(&format!(
            "\n{} error(s), {} warning(s), {} info in {}\n",
            s.errors, s.warnings, s.info, report.source,
        ));

        out
    }

    fn format_rules(&self, report: &RulesReport) -> String {
        let width = report.rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
        let mut out = String::new();
        for r in &report.rules {
            out.push_str(&format!(
                "{:<width$}  {:<7}  {}\n",
                r.id,
                r.severity.as_str(),
                r.description,
                width = width,
            ));
        }
        out.push_str(&format!("{} rule(s)\n", report.rules.len()));
        out
    }
}
