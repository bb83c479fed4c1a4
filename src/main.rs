//! `i18n-typegen` CLI entry point
//!
//! Parses arguments, runs the selected command, and prints errors with
//! context and suggestions:
//! - `generate` - write the declaration file (or print it, or watch sources)
//! - `check` - verify the declaration file on disk is current

use anyhow::Result;
use clap::Parser;
use i18n_typegen::cli;
use i18n_typegen::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
