//! lumen CLI: accessibility checks for UI component trees.
//!
//! This binary provides the `lumen` command with subcommands for auditing a
//! serialized tree, listing rules, and generating shell completions. See
//! `lumen --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter: Box<dyn lumen_output::OutputFormatter> = if cli.json {
        Box::new(lumen_output::json::JsonFormatter)
    } else {
        Box::new(lumen_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            file,
            strict,
            ignore,
            message,
        } => commands::check::run(&*formatter, file, strict, ignore, message),
        Commands::Rules => commands::rules::run(&*formatter),
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so stdout stays parseable. `LUMEN_LOG` takes
/// precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LUMEN_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
