//! Project configuration (`typegen.toml`).
//!
//! The only required setting is the ordered list of sources. Each source is a
//! path to a locale directory (or a single locale file) and produces one client
//! block in the output; order in the file is order in the output.
//!
//! ```toml
//! out = "src/types/i18n.d.ts"   # optional, default "i18n.d.ts"
//! namespace = "Localization"    # optional
//! interface = "Messages"        # optional
//!
//! [[sources]]
//! path = "locales/app"
//!
//! [[sources]]
//! path = "locales/admin"
//! ```
//!
//! Relative paths (sources and `out`) are resolved against the directory that
//! contains the configuration file, so a run behaves the same from any working
//! directory.

mod parser;

pub use parser::parse_config;

use crate::constants::{DEFAULT_INTERFACE, DEFAULT_NAMESPACE, DEFAULT_OUTPUT_FILE};
use crate::core::TypegenError;
use crate::emit::EmitOptions;
use crate::signature::is_identifier;
use crate::source::DirectorySource;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One `[[sources]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Locale directory or file.
    pub path: PathBuf,
}

/// Parsed contents of `typegen.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypegenConfig {
    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    /// Destination of the generated declaration file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_interface")]
    pub interface: String,

    /// Directory relative paths are resolved against; set by [`TypegenConfig::load`].
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_interface() -> String {
    DEFAULT_INTERFACE.to_string()
}

impl Default for TypegenConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            out: None,
            namespace: default_namespace(),
            interface: default_interface(),
            base_dir: PathBuf::new(),
        }
    }
}

impl TypegenConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// - [`TypegenError::ConfigNotFound`] if `path` does not exist
    /// - a parse error with file context if the TOML is malformed
    /// - any error from [`TypegenConfig::validate`]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TypegenError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let mut config: Self = parse_config(path)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// [`TypegenError::NoSources`] without sources, [`TypegenError::InvalidConfig`]
    /// if the namespace or interface name is not an identifier.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(TypegenError::NoSources.into());
        }

        for (field, value) in [("namespace", &self.namespace), ("interface", &self.interface)] {
            if !is_identifier(value) {
                return Err(TypegenError::InvalidConfig {
                    message: format!("{field} '{value}' is not a valid identifier"),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Resolves `path` against the configuration's directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// One directory source per configured entry, in configuration order.
    #[must_use]
    pub fn directory_sources(&self) -> Vec<DirectorySource> {
        self.sources.iter().map(|s| DirectorySource::new(self.resolve(&s.path))).collect()
    }

    /// The output path: `override_path`, else `out`, else the default file name.
    ///
    /// Only the configured `out` is resolved against the configuration's
    /// directory; an override is taken as given.
    #[must_use]
    pub fn output_path(&self, override_path: Option<&Path>) -> PathBuf {
        match (override_path, &self.out) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(out)) => self.resolve(out),
            (None, None) => self.resolve(Path::new(DEFAULT_OUTPUT_FILE)),
        }
    }

    #[must_use]
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            namespace: self.namespace.clone(),
            interface: self.interface.clone(),
        }
    }
}
