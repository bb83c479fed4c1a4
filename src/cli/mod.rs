//! Command-line interface for `i18n-typegen`.
//!
//! # Available Commands
//!
//! - `generate` - Build the declaration file from the configured locale sources
//! - `check` - Fail if the declaration file on disk is missing or outdated
//!
//! # Global Options
//!
//! All commands support these global options:
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//! - `--config` - Path to `typegen.toml` (also `I18N_TYPEGEN_CONFIG`; default:
//!   searched upwards from the current directory)
//!
//! # Example
//!
//! ```bash
//! i18n-typegen generate
//! i18n-typegen --config web/typegen.toml check
//! i18n-typegen -v generate --watch
//! ```
//!
//! Log output goes to stderr so `generate --stdout` can be piped.

mod check;
pub mod common;
mod generate;


pub use check::CheckCommand;
pub use generate::{GenerateCommand, WriteOutcome};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration for CLI execution.
///
/// Built from the global flags by [`Cli::build_config`]; tests can construct
/// one directly and pass it to [`Cli::execute_with_config`].
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// `None` leaves logging uninitialized.
    pub log_level: Option<String>,

    /// Suppress non-error output from commands.
    pub quiet: bool,

    /// Explicit path to `typegen.toml`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over [`CliConfig::log_level`]. Calling this
    /// more than once is harmless; later calls keep the first subscriber.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Generate TypeScript declarations for localization messages.
#[derive(Parser, Debug)]
#[command(
    name = "i18n-typegen",
    about = "Generate TypeScript declarations for localization messages",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "I18N_TYPEGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the declaration file
    Generate(GenerateCommand),

    /// Check that the declaration file is up to date
    Check(CheckCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns whatever error the selected command produced.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translates global flags into a [`CliConfig`].
    ///
    /// ```rust,ignore
    /// let cli = Cli::parse_from(["i18n-typegen", "--verbose", "generate"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit configuration instead of one built from flags.
    ///
    /// # Errors
    ///
    /// Returns whatever error the selected command produced.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let config_path = config.config_path.as_deref();

        match self.command {
            Commands::Generate(cmd) => cmd.execute_with_config_path(config_path, config.quiet).await,
            Commands::Check(cmd) => cmd.execute_with_config_path(config_path, config.quiet).await,
        }
    }
}
