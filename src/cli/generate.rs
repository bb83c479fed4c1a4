//! Generate the declaration file from configured locale sources.
//!
//! ```bash
//! # Write to the configured `out` path (default `i18n.d.ts`)
//! i18n-typegen generate
//!
//! # Write somewhere else, or print instead of writing
//! i18n-typegen generate --out types/i18n.d.ts
//! i18n-typegen generate --stdout
//!
//! # Regenerate whenever a locale file changes
//! i18n-typegen generate --watch --interval-ms 250
//! ```
//!
//! The file is only rewritten when its content would change, and writes are
//! atomic so editors and type checkers never observe a half-written file.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::common::{CommandContext, as_dyn_sources};
use crate::cache::SourceCache;
use crate::constants::DEFAULT_WATCH_INTERVAL;
use crate::source::DirectorySource;
use crate::utils::fs::{read_if_exists, safe_write};

/// Command to generate TypeScript declarations.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Output file, overriding `out` from the configuration
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Print the declarations instead of writing a file
    #[arg(long, conflicts_with_all = ["out", "watch"])]
    pub stdout: bool,

    /// Keep running and regenerate when locale files change
    #[arg(short, long)]
    pub watch: bool,

    /// Polling interval for `--watch`, in milliseconds
    #[arg(long, value_name = "MS", requires = "watch")]
    pub interval_ms: Option<u64>,
}

/// What a single generation pass did with the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
    Printed,
}

impl GenerateCommand {
    /// Runs the command against the configuration at `config_path`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration cannot be loaded, a source cannot be read, or
    /// the output file cannot be written. In watch mode, source errors after the
    /// first pass are logged and the watcher keeps running.
    pub async fn execute_with_config_path(
        self,
        config_path: Option<&Path>,
        quiet: bool,
    ) -> Result<()> {
        let ctx = CommandContext::load(config_path)?;
        let sources = ctx.sources();
        let out = ctx.output_path(self.out.as_deref());
        let mut cache = SourceCache::new();

        // Record fingerprints before the first load so the first refresh
        // does not report every source as changed.
        if self.watch {
            cache.refresh(&sources)?;
        }

        let outcome = self.run_once(&ctx, &sources, &mut cache, &out)?;
        report(outcome, &out, quiet);

        if !self.watch {
            return Ok(());
        }

        let interval = self.interval_ms.map_or(DEFAULT_WATCH_INTERVAL, Duration::from_millis);
        if !quiet {
            println!("{} {} source(s), press Ctrl-C to stop", "Watching".cyan(), sources.len());
        }
        info!("Polling sources every {}ms", interval.as_millis());

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);
        let mut pending = false;

        loop {
            tokio::select! {
                () = tokio::time::sleep(interval) => {}
                _ = &mut shutdown => {
                    debug!("Interrupted, stopping watcher");
                    return Ok(());
                }
            }

            if !should_regenerate(cache.refresh(&sources), &mut pending) {
                continue;
            }

            match self.run_once(&ctx, &sources, &mut cache, &out) {
                Ok(outcome) => report(outcome, &out, quiet),
                Err(e) => warn!("Regeneration failed: {e:#}"),
            }
        }
    }

    fn run_once(
        &self,
        ctx: &CommandContext,
        sources: &[DirectorySource],
        cache: &mut SourceCache,
        out: &Path,
    ) -> Result<WriteOutcome> {
        let output = ctx.generator().generate_cached(&as_dyn_sources(sources), cache)?;

        if self.stdout {
            print!("{output}");
            return Ok(WriteOutcome::Printed);
        }

        if read_if_exists(out)?.as_deref() == Some(output.as_str()) {
            debug!("{} is up to date", out.display());
            return Ok(WriteOutcome::Unchanged);
        }

        safe_write(out, &output)?;
        Ok(WriteOutcome::Written)
    }
}

/// Decides whether a watch tick regenerates, given the result of refreshing
/// source fingerprints.
///
/// A failed refresh may already have invalidated some sources without
/// reporting them, so it leaves `pending` set and the next successful tick
/// regenerates even if it sees no new change.
fn should_regenerate(refreshed: Result<Vec<String>>, pending: &mut bool) -> bool {
    match refreshed {
        Ok(changed) if changed.is_empty() && !*pending => false,
        Ok(changed) => {
            if !changed.is_empty() {
                info!("Change detected in {}", changed.join(", "));
            }
            *pending = false;
            true
        }
        Err(e) => {
            warn!("Failed to check sources for changes: {e:#}");
            *pending = true;
            false
        }
    }
}

fn report(outcome: WriteOutcome, out: &Path, quiet: bool) {
    if quiet {
        return;
    }
    match outcome {
        WriteOutcome::Written => println!("{} {}", "✓ Generated".green(), out.display()),
        WriteOutcome::Unchanged => println!("{} {}", "✓ Up to date".green(), out.display()),
        WriteOutcome::Printed => {}
    }
}
