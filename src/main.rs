//! arrdb CLI entry point
//!
//! Parses arguments, runs validation, and maps the outcome to an exit status:
//! `0` passed, `1` findings, `2` the database or its configuration could not
//! be read.

use arrdb_cli::cli;
use arrdb_cli::core::user_friendly_error;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let code = match cli.execute().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            ExitCode::from(2)
        }
    };

    let _ = std::io::stdout().flush();
    code
}
