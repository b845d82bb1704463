//! jiramark - render JIRA wiki markup for the terminal.

use std::process::ExitCode;

use clap::Parser;

use jiramark::cli::{self, Cli};
use jiramark::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = cli::run(&cli);
    logging::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("Hint: {}", action);
            }
            ExitCode::FAILURE
        }
    }
}
