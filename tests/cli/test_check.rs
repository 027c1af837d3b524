// Tests for `lumen check`.

use crate::common::{create_project, run_lumen};

const PAGE: &str = r#"{
    "type": "main",
    "children": [
        { "type": "img", "props": { "src": "hero.png" } },
        { "type": "h1", "children": [{ "type": "h3", "children": "Deep" }] }
    ]
}"#;

#[test]
fn test_check_human_output() {
    let (_dir, root) = create_project(&[("page.json", PAGE)]);
    let output = run_lumen(&root, &["check", "page.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error[img-alt]: Images must have valid alt text"));
    assert!(stdout.contains("  --> page.json:$.children[0]"));
    assert!(stdout.contains("warning[heading-order]"));
    assert!(stdout.contains("  --> page.json:$.children[1].children[0]"));
    assert!(stdout.ends_with("1 error(s), 1 warning(s), 0 info in page.json\n"));
}

#[test]
fn test_check_json_output() {
    let (_dir, root) = create_project(&[("page.json", PAGE)]);
    let output = run_lumen(&root, &["--json", "check", "page.json"]);

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)
        .expect("stdout must be valid JSON");
    assert_eq!(parsed["passed"], false);
    assert_eq!(parsed["source"], "page.json");
    assert_eq!(parsed["violations"].as_array().unwrap().len(), 2);
}

#[test]
fn test_check_flags() {
    let (_dir, root) = create_project(&[("page.json", PAGE)]);
    let output = run_lumen(
        &root,
        &[
            "check",
            "page.json",
            "--json",
            "--strict",
            "--ignore",
            "img-alt",
            "--message",
            "heading-order=Keep the outline flat",
        ],
    );

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let violations = parsed["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["rule_id"], "heading-order");
    assert_eq!(violations[0]["severity"], "error");
    assert_eq!(violations[0]["message"], "Keep the outline flat");
}

#[test]
fn test_check_reads_project_config() {
    let (_dir, root) = create_project(&[
        ("page.json", PAGE),
        (
            ".lumen/lumen.json",
            r#"{ "ignore_rules": ["heading-order"], "custom_messages": { "img-alt": "Add alt" } }"#,
        ),
    ]);
    let output = run_lumen(&root, &["--json", "check", "page.json"]);

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let violations = parsed["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["message"], "Add alt");
}

#[test]
fn test_check_message_flag_overrides_config() {
    let (_dir, root) = create_project(&[
        ("page.json", PAGE),
        (
            ".lumen/lumen.json",
            r#"{ "custom_messages": { "img-alt": "From config" } }"#,
        ),
    ]);
    let output = run_lumen(
        &root,
        &["--json", "check", "page.json", "--message", "img-alt=From flag"],
    );

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["violations"][0]["message"], "From flag");
}

#[test]
fn test_check_clean_tree_is_silent() {
    let (_dir, root) = create_project(&[(
        "ok.json",
        r#"{ "type": "main", "children": [{ "type": "h1", "children": "Welcome" }] }"#,
    )]);
    let output = run_lumen(&root, &["check", "ok.json"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "clean check must print nothing");
}
