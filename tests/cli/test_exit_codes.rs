// Tests for CLI exit code behavior.

use crate::common::{create_project, run_lumen};

const WARNING_ONLY: &str = r#"{ "type": "div", "children": [{ "type": "h4" }] }"#;

#[test]
fn test_exit_code_1_on_any_violation_by_default() {
    let (_dir, root) = create_project(&[("tree.json", WARNING_ONLY)]);
    let output = run_lumen(&root, &["check", "tree.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_fail_on_error_lets_warnings_through() {
    let (_dir, root) = create_project(&[
        ("tree.json", WARNING_ONLY),
        (".lumen/lumen.json", r#"{ "fail_on": "error" }"#),
    ]);
    let output = run_lumen(&root, &["check", "tree.json"]);
    assert_eq!(output.status.code(), Some(0));
    // The warning is still reported.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning[heading-order]"));
}

#[test]
fn test_strict_flag_trips_fail_on_error() {
    let (_dir, root) = create_project(&[
        ("tree.json", WARNING_ONLY),
        (".lumen/lumen.json", r#"{ "fail_on": "error" }"#),
    ]);
    let output = run_lumen(&root, &["check", "tree.json", "--strict"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_exit_code_2_on_missing_file() {
    let (_dir, root) = create_project(&[]);
    let output = run_lumen(&root, &["check", "missing.json"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lumen check: failed to load missing.json"));
}

#[test]
fn test_exit_code_2_on_non_element_root() {
    let (_dir, root) = create_project(&[("tree.json", r#"{ "props": {} }"#)]);
    let output = run_lumen(&root, &["check", "tree.json"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected an element object at $"));
}

#[test]
fn test_exit_code_2_on_usage_error() {
    let (_dir, root) = create_project(&[]);
    let output = run_lumen(&root, &["check", "tree.json", "--message", "no-equals"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unsupported_shell() {
    let (_dir, root) = create_project(&[]);
    let output = run_lumen(&root, &["completion", "tcsh"]);
    assert_eq!(output.status.code(), Some(2));
}
