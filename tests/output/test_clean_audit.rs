// Tests for passing audit output behavior.
use lumen_enforce::{evaluate, AuditOptions};
use lumen_output::human::HumanFormatter;
use lumen_output::json::JsonFormatter;
use lumen_output::{AuditReport, OutputFormatter};

use crate::common::accessible_page;

fn clean_report() -> AuditReport {
    let result = evaluate(&accessible_page(), &AuditOptions::default()).unwrap();
    AuditReport::new("pages/home.json", &result)
}

#[test]
fn test_clean_audit_human_is_empty() {
    let out = HumanFormatter.format_audit(&clean_report());
    assert!(out.is_empty(), "Clean audit must produce empty output");
}

#[test]
fn test_clean_audit_json() {
    let out = JsonFormatter.format_audit(&clean_report());
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed["passed"], true);
    assert_eq!(parsed["source"], "pages/home.json");
    assert_eq!(parsed["violations"].as_array().unwrap().len(), 0);
    assert_eq!(parsed["summary"]["errors"], 0);
    assert_eq!(parsed["summary"]["warnings"], 0);
    assert_eq!(parsed["summary"]["info"], 0);
}
