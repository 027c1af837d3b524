use lumen_enforce::types::Violation;

/// Render child indices as a document path, `$` being the root.
pub(crate) fn format_path(path: &[usize]) -> String {
    let mut out = String::from("$");
    for idx in path {
        out.push_str(&format!(".children[{}]", idx));
    }
    out
}

pub(crate) fn format_violation_human(v: &Violation, source: &str) -> String {
    let element = match &v.element.component {
        Some(name) => format!("<{}>", name),
        None => v.element.kind.clone(),
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{}\n   = element: {}\n",
        v.severity,
        v.rule_id,
        v.message,
        source,
        format_path(&v.path),
        element,
    );

    if let Some(role) = v.element.props.str("role") {
        out.push_str(&format!("   = role: {}\n", role));
    }

    out
}
