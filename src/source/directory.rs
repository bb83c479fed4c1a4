//! Locale files on disk.
//!
//! A [`DirectorySource`] points at either a single locale file or a directory.
//! Inside a directory two layouts are recognized and may be mixed:
//!
//! ```text
//! locales/app/en.json            -> locale "en", keys at the root
//! locales/app/de.yaml            -> locale "de"
//! locales/app/fr/common.toml     -> locale "fr", keys under "common"
//! locales/app/fr/errors.json     -> locale "fr", keys under "errors"
//! ```
//!
//! Files are visited in file-name order so repeated runs over unchanged data
//! produce identical entries. Hidden files and unknown extensions are ignored.
//!
//! Values are mapped as follows: strings are templates, objects/tables are
//! namespaces, numbers, booleans and TOML datetimes become templates of their
//! textual form, and `null` values and arrays are skipped with a warning.
//! Scalar mapping keys are used by their text (`404:` in YAML is key `"404"`).

use super::{Content, LocaleEntry, LocaleSource, normalize};
use crate::constants::LOCALE_EXTENSIONS;
use crate::core::TypegenError;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A source reading locale files from a file or directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    id: String,
    path: PathBuf,
}

impl DirectorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: path.display().to_string(),
            path,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists the locale files this source reads, in visiting order.
    ///
    /// Each item is the file path and, for files in a per-locale subdirectory,
    /// the directory name.
    ///
    /// # Errors
    ///
    /// Fails with [`TypegenError::SourceNotFound`] if the path does not exist.
    pub fn locale_files(&self) -> Result<Vec<(PathBuf, Option<String>)>> {
        if !self.path.exists() {
            return Err(TypegenError::SourceNotFound {
                path: self.id.clone(),
            }
            .into());
        }

        if self.path.is_file() {
            return Ok(if is_locale_file(&self.path) {
                vec![(self.path.clone(), None)]
            } else {
                Vec::new()
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e.file_name()))
        {
            let entry = entry
                .with_context(|| format!("Failed to scan locale directory {}", self.id))?;
            if !entry.file_type().is_file() || !is_locale_file(entry.path()) {
                continue;
            }

            let namespace_dir = (entry.depth() == 2)
                .then(|| entry.path().parent().and_then(file_name_string))
                .flatten();
            files.push((entry.into_path(), namespace_dir));
        }

        Ok(files)
    }
}

impl LocaleSource for DirectorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn entries(&self) -> Result<Vec<LocaleEntry>> {
        let files = self.locale_files()?;
        if files.is_empty() {
            return Err(TypegenError::NoLocaleFiles {
                path: self.id.clone(),
            }
            .into());
        }

        let mut entries = Vec::with_capacity(files.len());
        for (file, locale_dir) in files {
            let content = read_locale_file(&file)?;
            let stem = file_stem_or_name(&file).unwrap_or_default();

            let entry = match locale_dir {
                Some(locale) => {
                    let namespaced = Content::Namespace(IndexMap::from([(stem, content)]));
                    LocaleEntry::new(locale, normalize(&namespaced))
                }
                None => LocaleEntry::new(stem, normalize(&content)),
            };
            debug!(
                "Loaded {} key(s) for locale '{}' from {}",
                entry.tree.leaf_count(),
                entry.locale,
                file.display()
            );
            entries.push(entry);
        }

        Ok(entries)
    }
}

/// A locale value after format-specific parsing.
///
/// Mapping keys are already in textual form, so `404:` in YAML and `"404"` in
/// JSON land on the same key.
#[derive(Debug)]
enum RawValue {
    Text(String),
    Map(Vec<(String, RawValue)>),
    List,
    Null,
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(text) => Self::Text(text),
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Number(n) => Self::Text(n.to_string()),
            Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
            Value::Array(_) => Self::List,
            Value::Null => Self::Null,
        }
    }
}

impl From<toml::Value> for RawValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;
        match value {
            Value::String(text) => Self::Text(text),
            Value::Integer(i) => Self::Text(i.to_string()),
            Value::Float(f) => Self::Text(f.to_string()),
            Value::Boolean(b) => Self::Text(b.to_string()),
            Value::Datetime(d) => Self::Text(d.to_string()),
            Value::Table(table) => {
                Self::Map(table.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Array(_) => Self::List,
        }
    }
}

impl From<serde_yaml::Value> for RawValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::String(text) => Self::Text(text),
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Number(n) => Self::Text(n.to_string()),
            Value::Mapping(mapping) => Self::Map(
                mapping
                    .into_iter()
                    .filter_map(|(key, value)| match yaml_key(&key) {
                        Some(key) => Some((key, value.into())),
                        None => {
                            warn!("Skipping YAML entry with non-scalar key {key:?}");
                            None
                        }
                    })
                    .collect(),
            ),
            Value::Tagged(tagged) => {
                let tagged = *tagged;
                tagged.value.into()
            }
            Value::Sequence(_) => Self::List,
            Value::Null => Self::Null,
        }
    }
}

/// Textual form of a scalar YAML mapping key.
fn yaml_key(key: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;
    match key {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => yaml_key(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Parses one locale file into content according to its extension.
fn read_locale_file(path: &Path) -> Result<Content> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file {}", path.display()))?;

    let parse_error = |reason: String| TypegenError::LocaleParseError {
        path: path.display().to_string(),
        reason,
    };

    let raw: RawValue = match extension(path).as_deref() {
        Some("json") => serde_json::from_str::<serde_json::Value>(&text)
            .map_err(|e| parse_error(e.to_string()))?
            .into(),
        Some("yaml" | "yml") => serde_yaml::from_str::<serde_yaml::Value>(&text)
            .map_err(|e| parse_error(e.to_string()))?
            .into(),
        Some("toml") => toml::Value::Table(
            toml::from_str::<toml::Table>(&text).map_err(|e| parse_error(e.to_string()))?,
        )
        .into(),
        _ => return Err(parse_error("unsupported file extension".to_string()).into()),
    };

    match to_content(raw, &path.display().to_string(), "") {
        Some(content @ Content::Namespace(_)) => Ok(content),
        Some(_) | None => {
            Err(parse_error("top-level value must be an object of messages".to_string()).into())
        }
    }
}

fn to_content(raw: RawValue, file: &str, key_path: &str) -> Option<Content> {
    match raw {
        RawValue::Text(text) => Some(Content::Template(text)),
        RawValue::Map(children) => Some(Content::Namespace(
            children
                .into_iter()
                .filter_map(|(key, value)| {
                    let child_path =
                        if key_path.is_empty() { key.clone() } else { format!("{key_path}.{key}") };
                    to_content(value, file, &child_path).map(|content| (key, content))
                })
                .collect::<IndexMap<_, _>>(),
        )),
        RawValue::List => {
            warn!("Skipping array value '{key_path}' in {file}");
            None
        }
        RawValue::Null => {
            warn!("Skipping null value '{key_path}' in {file}");
            None
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase)
}

fn is_locale_file(path: &Path) -> bool {
    extension(path).is_some_and(|ext| LOCALE_EXTENSIONS.contains(&ext.as_str()))
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

fn file_stem_or_name(path: &Path) -> Option<String> {
    path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
}

fn file_name_string(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}
