//! Verify that the generated declaration file is current.
//!
//! Intended for CI: the command regenerates in memory and fails with a
//! non-zero exit code when the file on disk is missing or differs.
//!
//! ```bash
//! i18n-typegen check
//! i18n-typegen check --out types/i18n.d.ts
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::common::{CommandContext, as_dyn_sources};
use crate::core::TypegenError;
use crate::utils::fs::read_if_exists;

/// Command to check the declaration file for staleness.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Declaration file to compare, overriding `out` from the configuration
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl CheckCommand {
    /// # Errors
    ///
    /// Returns [`TypegenError::StaleOutput`] if the file does not match what
    /// would be generated, or any load error.
    pub async fn execute_with_config_path(
        self,
        config_path: Option<&Path>,
        quiet: bool,
    ) -> Result<()> {
        let ctx = CommandContext::load(config_path)?;
        let out = ctx.output_path(self.out.as_deref());
        let sources = ctx.sources();
        let expected = ctx.generator().generate(&as_dyn_sources(&sources))?;

        let actual = read_if_exists(&out)?;
        if actual.as_deref() != Some(expected.as_str()) {
            debug!(
                "{} is {}",
                out.display(),
                if actual.is_some() { "outdated" } else { "missing" }
            );
            return Err(TypegenError::StaleOutput {
                path: out.display().to_string(),
            }
            .into());
        }

        if !quiet {
            println!("{} {}", "✓ Up to date".green(), out.display());
        }
        Ok(())
    }
}
