//! mcpcfg CLI entry point
//!
//! Parses arguments, runs the command, and renders failures as colored
//! errors with suggestions. Exits with status 1 on any failure.

use anyhow::Result;
use clap::Parser;
use mcpcfg_cli::cli;
use mcpcfg_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
