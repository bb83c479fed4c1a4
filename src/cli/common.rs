//! Shared plumbing for CLI commands.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::TypegenConfig;
use crate::generator::Generator;
use crate::source::DirectorySource;
use crate::utils::fs::find_config_file;

/// Loaded project state a command works against.
#[derive(Debug)]
pub struct CommandContext {
    /// Parsed and validated `typegen.toml`
    pub config: TypegenConfig,
    /// Path the configuration was read from
    pub config_path: PathBuf,
}

impl CommandContext {
    /// Loads the configuration at `config_path`, or discovers `typegen.toml`
    /// from the current directory upwards when no path is given.
    ///
    /// # Errors
    ///
    /// Fails if no configuration can be found or it does not validate.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => find_config_file(&std::env::current_dir()?)?,
        };
        debug!("Using configuration {}", config_path.display());

        let config = TypegenConfig::load(&config_path)?;
        Ok(Self {
            config,
            config_path,
        })
    }

    #[must_use]
    pub fn generator(&self) -> Generator {
        Generator::new(self.config.emit_options())
    }

    #[must_use]
    pub fn sources(&self) -> Vec<DirectorySource> {
        self.config.directory_sources()
    }

    /// Output path after applying a command-line override.
    #[must_use]
    pub fn output_path(&self, override_path: Option<&Path>) -> PathBuf {
        self.config.output_path(override_path)
    }
}

/// Borrows directory sources as trait objects for the generator.
#[must_use]
pub fn as_dyn_sources(sources: &[DirectorySource]) -> Vec<&dyn crate::source::LocaleSource> {
    sources.iter().map(|s| s as &dyn crate::source::LocaleSource).collect()
}
