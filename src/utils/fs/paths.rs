//! Configuration file discovery.

use crate::constants::CONFIG_FILE_NAME;
use crate::core::TypegenError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Finds `typegen.toml` in `start` or the nearest parent directory.
///
/// # Errors
///
/// Returns [`TypegenError::ConfigNotFound`] naming the starting location if no
/// directory up to the file system root contains a configuration file.
pub fn find_config_file(start: &Path) -> Result<PathBuf> {
    let mut current = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }

        if !current.pop() {
            return Err(TypegenError::ConfigNotFound {
                path: start.join(CONFIG_FILE_NAME).display().to_string(),
            }
            .into());
        }
    }
}
