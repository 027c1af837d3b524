use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "lumen", version, about = "Accessibility checks for UI component trees")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log evaluation details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Audit a component tree stored as JSON
    Check {
        /// Path to the tree document
        file: PathBuf,
        /// Report every violation as an error
        #[arg(long)]
        strict: bool,
        /// Skip a rule by id (repeatable)
        #[arg(long, value_name = "RULE")]
        ignore: Vec<String>,
        /// Replace a rule's message, as RULE=TEXT (repeatable)
        #[arg(long, value_name = "RULE=TEXT", value_parser = parse_message)]
        message: Vec<(String, String)>,
    },

    /// List the built-in rules
    Rules,

    /// Generate shell completions
    Completion {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse `RULE=TEXT`. The text may itself contain `=`.
pub(crate) fn parse_message(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((rule, text)) if !rule.trim().is_empty() => {
            Ok((rule.trim().to_string(), text.to_string()))
        }
        _ => Err(format!("expected RULE=TEXT, got '{raw}'")),
    }
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
