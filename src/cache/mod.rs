//! Short-lived cache of loaded locale sources.
//!
//! Watch mode regenerates declarations whenever a source changes. Reloading and
//! reparsing every source on every tick is wasteful, so [`SourceCache`] keeps
//! the entries of each source keyed by its identity until it is explicitly
//! invalidated. Change detection is separate: [`fingerprint_path`] hashes the
//! locale files under a path, and [`SourceCache::refresh`] invalidates every
//! source whose fingerprint moved since the last look.
//!
//! The cache is an ordinary owned value. Whoever drives a run creates one,
//! passes it along, and drops it afterwards; nothing is shared process-wide.
//!
//! # Example
//!
//! ```rust,no_run
//! use i18n_typegen::cache::SourceCache;
//! use i18n_typegen::source::DirectorySource;
//!
//! # fn example() -> anyhow::Result<()> {
//! let sources = vec![DirectorySource::new("locales/app")];
//! let mut cache = SourceCache::new();
//!
//! let entries = cache.get_or_load(&sources[0])?;
//! println!("{} locale entries", entries.len());
//!
//! // Later, after files may have changed on disk
//! let changed = cache.refresh(&sources)?;
//! if !changed.is_empty() {
//!     println!("Reloading {changed:?}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::core::TypegenError;
use crate::source::{DirectorySource, LocaleEntry, LocaleSource};
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Fingerprint recorded for a source path that does not exist.
const MISSING_FINGERPRINT: &str = "missing";

/// Loaded source entries keyed by [`LocaleSource::id`].
#[derive(Debug, Default)]
pub struct SourceCache {
    entries: HashMap<String, Vec<LocaleEntry>>,
    fingerprints: HashMap<String, String>,
}

impl SourceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached entries of `source`, loading them on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the source's load error; nothing is cached in that case.
    pub fn get_or_load(&mut self, source: &dyn LocaleSource) -> Result<&[LocaleEntry]> {
        let id = source.id();
        if !self.entries.contains_key(id) {
            debug!("Loading source '{id}'");
            let loaded = source
                .entries()
                .with_context(|| format!("Failed to load locale source '{id}'"))?;
            self.entries.insert(id.to_string(), loaded);
        } else {
            debug!("Using cached entries for source '{id}'");
        }
        Ok(self.entries.get(id).map(Vec::as_slice).unwrap_or_default())
    }

    /// Drops the cached entries of one source. Returns whether any were held.
    pub fn invalidate(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Drops everything, including recorded fingerprints.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.fingerprints.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-fingerprints every directory source and invalidates those that changed.
    ///
    /// Returns the ids of invalidated sources in input order. The first call
    /// only records fingerprints and reports sources that were cached before any
    /// fingerprint was known.
    ///
    /// # Errors
    ///
    /// Fails if a locale file cannot be read while hashing.
    pub fn refresh(&mut self, sources: &[DirectorySource]) -> Result<Vec<String>> {
        let mut changed = Vec::new();
        for source in sources {
            let current = fingerprint_path(source.path())?;
            let previous = self.fingerprints.insert(source.id().to_string(), current.clone());
            let moved = match previous {
                Some(previous) => previous != current,
                None => self.contains(source.id()),
            };
            if moved {
                debug!("Source '{}' changed on disk", source.id());
                self.invalidate(source.id());
                changed.push(source.id().to_string());
            }
        }
        Ok(changed)
    }
}

/// SHA-256 over the names and bytes of all locale files under `path`.
///
/// Files are hashed in the same order a [`DirectorySource`] reads them, so the
/// fingerprint is stable across runs. A missing path has a fixed fingerprint
/// rather than an error so that watchers can notice it reappearing.
///
/// # Errors
///
/// Fails if a locale file exists but cannot be read.
pub fn fingerprint_path(path: &Path) -> Result<String> {
    let source = DirectorySource::new(path);
    let files = match source.locale_files() {
        Ok(files) => files,
        Err(err)
            if matches!(
                err.downcast_ref::<TypegenError>(),
                Some(TypegenError::SourceNotFound { .. })
            ) =>
        {
            return Ok(MISSING_FINGERPRINT.to_string());
        }
        Err(err) => return Err(err),
    };

    let mut hasher = Sha256::new();
    for (file, _) in files {
        let relative = file.strip_prefix(path).unwrap_or(&file);
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        let bytes = std::fs::read(&file)
            .with_context(|| format!("Failed to read {} for fingerprinting", file.display()))?;
        hasher.update(&bytes);
        hasher.update([0u8]);
    }

    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}
