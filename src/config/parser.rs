//! Reading `typegen.toml` into typed configuration.
//!
//! Kept separate from [`TypegenConfig`](super::TypegenConfig) so that loading
//! and validation stay distinct steps: this function only reads and
//! deserializes, and every failure names the offending file.

use anyhow::{Context, Result};
use std::path::Path;

/// Deserializes the TOML file at `path` into `T`.
///
/// ```rust,no_run
/// use i18n_typegen::config::{parse_config, TypegenConfig};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: TypegenConfig = parse_config(Path::new("typegen.toml"))?;
/// for source in &config.sources {
///     println!("{}", source.path.display());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails if the file cannot be read or its contents do not deserialize into
/// `T`; unknown keys are rejected when `T` denies them.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&text).with_context(|| format!("Invalid configuration in {}", path.display()))
}
