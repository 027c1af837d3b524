// Tests for `lumen rules` and `lumen completion`.

use crate::common::{create_project, run_lumen};

#[test]
fn test_rules_human_listing() {
    let (_dir, root) = create_project(&[]);
    let output = run_lumen(&root, &["rules"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap();
    assert!(first.starts_with("img-alt"));
    assert!(stdout.ends_with("14 rule(s)\n"));
}

#[test]
fn test_rules_json_listing() {
    let (_dir, root) = create_project(&[]);
    let output = run_lumen(&root, &["rules", "--json"]);
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["rules"][2]["id"], "heading-order");
    assert_eq!(parsed["rules"][2]["severity"], "warning");
}

#[test]
fn test_completion_bash() {
    let (_dir, root) = create_project(&[]);
    let output = run_lumen(&root, &["completion", "bash"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lumen"));
    assert!(stdout.contains("check"));
}
