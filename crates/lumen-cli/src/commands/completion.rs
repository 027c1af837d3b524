use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli_args::Cli;

/// Run `lumen completion <shell>` -- write the completion script to stdout.
pub fn run(shell: Shell) -> i32 {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut stdout = std::io::stdout().lock();
    generate(shell, &mut cmd, bin_name, &mut stdout);
    match stdout.flush() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("lumen completion: failed to write script: {}", e);
            2
        }
    }
}
