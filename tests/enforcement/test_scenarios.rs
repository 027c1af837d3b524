// Behavioral scenarios over hand-built trees.

use lumen_core::context::Context;
use lumen_core::types::{Node, Severity};
use lumen_enforce::{evaluate, AuditOptions};

use crate::common::{accessible_page, broken_page};

#[test]
fn test_accessible_page_passes() {
    let result = evaluate(&accessible_page(), &AuditOptions::default()).unwrap();
    assert!(result.passed, "unexpected violations: {:?}", result.violations);
    assert!(result.violations.is_empty());
}

#[test]
fn test_broken_page_reports_in_document_order() {
    let result = evaluate(&broken_page(), &AuditOptions::default()).unwrap();
    assert!(!result.passed);
    let ids: Vec<&str> = result.rule_ids().collect();
    assert_eq!(
        ids,
        vec!["img-alt", "button-role", "heading-order", "table-structure"]
    );
    let paths: Vec<&[usize]> = result.violations.iter().map(|v| v.path.as_slice()).collect();
    assert_eq!(paths, vec![&[0][..], &[1][..], &[2, 0][..], &[3][..]]);
}

#[test]
fn test_broken_page_summary() {
    let result = evaluate(&broken_page(), &AuditOptions::default()).unwrap();
    let summary = result.summary();
    assert_eq!(summary.errors, 3);
    assert_eq!(summary.warnings, 1);
    assert_eq!(summary.info, 0);
    assert!(result.exceeds(Severity::Error));
}

#[test]
fn test_violation_snapshot_carries_props() {
    let result = evaluate(&broken_page(), &AuditOptions::default()).unwrap();
    let img = &result.violations[0];
    assert_eq!(img.element.kind, "img");
    assert_eq!(img.element.component, None);
    assert_eq!(img.element.props.str("src"), Some("hero.png"));
    assert_eq!(img.message, "Images must have valid alt text");
}

#[test]
fn test_heading_fixed_by_ignoring_rule() {
    let tree = Node::element("h1").child(Node::element("h3"));
    let options = AuditOptions::default().ignore("heading-order");
    let result = evaluate(&tree, &options).unwrap();
    assert!(result.passed);
}

#[test]
fn test_nested_heading_outline() {
    // h1 > h2 > h3 is a valid outline; h2 > h4 skips a level.
    let tree = Node::element("h1").child(
        Node::element("h2")
            .child(Node::element("h3"))
            .child(Node::element("h4")),
    );
    let result = evaluate(&tree, &AuditOptions::default()).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].rule_id, "heading-order");
    assert_eq!(result.violations[0].path, vec![0, 1]);
}

#[test]
fn test_seeded_context_changes_heading_baseline() {
    let tree = Node::element("h4");
    let flat = evaluate(&tree, &AuditOptions::default()).unwrap();
    assert_eq!(flat.rule_ids().collect::<Vec<_>>(), vec!["heading-order"]);

    let seeded = AuditOptions::default().with_context(Context {
        level: 3,
        ..Context::default()
    });
    assert!(evaluate(&tree, &seeded).unwrap().passed);
}

#[test]
fn test_hidden_focusable_and_vague_link() {
    let tree = Node::element("footer")
        .child(
            Node::element("div")
                .prop("aria-hidden", true)
                .prop("tabIndex", 0),
        )
        .child(Node::element("a").prop("href", "/blog").text("Read more"));
    let result = evaluate(&tree, &AuditOptions::default()).unwrap();
    assert_eq!(
        result.rule_ids().collect::<Vec<_>>(),
        vec!["focus-management", "link-text"]
    );
}

#[test]
fn test_live_and_busy_regions() {
    let tree = Node::element("div")
        .child(Node::element("div").prop("role", "status"))
        .child(
            Node::element("div")
                .prop("role", "progressbar")
                .prop("aria-busy", true)
                .prop("aria-live", "polite"),
        )
        .child(Node::element("div").prop("aria-busy", true));
    let result = evaluate(&tree, &AuditOptions::default()).unwrap();
    let found: Vec<(&str, Vec<usize>)> = result
        .violations
        .iter()
        .map(|v| (v.rule_id.as_str(), v.path.clone()))
        .collect();
    assert_eq!(
        found,
        vec![("live-regions", vec![0]), ("loading-states", vec![2])]
    );
}

#[test]
fn test_invalid_field_needs_error_message() {
    let bad = Node::element("input")
        .prop("aria-label", "Email")
        .prop("aria-invalid", true);
    let result = evaluate(&bad, &AuditOptions::default()).unwrap();
    assert_eq!(result.rule_ids().collect::<Vec<_>>(), vec!["error-handling"]);

    let good = bad.prop("aria-errormessage", "email-error");
    assert!(evaluate(&good, &AuditOptions::default()).unwrap().passed);
}
