//! Temporary project builder for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_OUTPUT_FILE};

/// A temporary directory laid out like an i18n-typegen project.
///
/// The directory is removed when the value is dropped.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `typegen.toml` in the project
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.path().join(CONFIG_FILE_NAME)
    }

    /// Path of the default output file
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.path().join(DEFAULT_OUTPUT_FILE)
    }

    /// Write a locale file at `<source>/<file>`; `file` may contain one
    /// directory level such as `en/common.json`
    pub fn with_locale(self, source: &str, file: &str, content: &str) -> Result<Self> {
        self.write_file(&format!("{source}/{file}"), content)?;
        Ok(self)
    }

    /// Write a `typegen.toml` listing `sources` in order
    pub fn with_config(self, sources: &[&str]) -> Result<Self> {
        let mut text = String::new();
        for source in sources {
            text.push_str(&format!("[[sources]]\npath = \"{source}\"\n\n"));
        }
        self.write_file(CONFIG_FILE_NAME, &text)?;
        Ok(self)
    }

    /// Write an arbitrary file relative to the project root
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read a file relative to the project root
    pub fn read_file(&self, relative: &str) -> Result<String> {
        let path = self.path().join(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
