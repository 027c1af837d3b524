use std::path::{Path, PathBuf};

use lumen_core::config::LumenConfig;
use lumen_core::document::load_document;
use lumen_enforce::{evaluate, AuditOptions, AuditResult};
use lumen_output::{AuditReport, OutputFormatter};

/// Run `lumen check <file>` -- audit one serialized component tree.
///
/// Exit codes: 0 when no violation reaches the configured `fail_on`
/// severity, 1 when one does, 2 when the tree or a rule could not be
/// evaluated.
pub fn run(
    formatter: &dyn OutputFormatter,
    file: PathBuf,
    strict: bool,
    ignore: Vec<String>,
    messages: Vec<(String, String)>,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("lumen check: failed to get current directory: {}", e);
            return 2;
        }
    };
    let config = LumenConfig::load(&cwd.join(".lumen"));

    let root = match load_document(&file) {
        Ok(node) => node,
        Err(e) => {
            eprintln!("lumen check: failed to load {}: {}", file.display(), e);
            return 2;
        }
    };

    let options = build_options(&config, strict, &ignore, &messages);
    tracing::debug!(
        file = %file.display(),
        strict = options.strict_mode,
        ignored = options.ignore_rules.len(),
        "checking tree"
    );

    let result = match evaluate(&root, &options) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("lumen check: {}", e);
            return 2;
        }
    };

    print!("{}", formatter.format_audit(&AuditReport::new(display_name(&file), &result)));
    exit_code(&result, &config)
}

/// Layer command-line flags over the loaded config. Ignored rules are
/// unioned; messages given on the command line win.
pub(crate) fn build_options(
    config: &LumenConfig,
    strict: bool,
    ignore: &[String],
    messages: &[(String, String)],
) -> AuditOptions {
    let mut options = AuditOptions::from_config(config);
    if strict {
        options = options.strict();
    }
    for rule_id in ignore {
        options = options.ignore(rule_id);
    }
    for (rule_id, text) in messages {
        options = options.message(rule_id, text);
    }
    options
}

pub(crate) fn exit_code(result: &AuditResult, config: &LumenConfig) -> i32 {
    if result.exceeds(config.fail_on) {
        1
    } else {
        0
    }
}

fn display_name(file: &Path) -> String {
    file.to_string_lossy().into_owned()
}
