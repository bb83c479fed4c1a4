//! Locale sources and normalization into shape trees.
//!
//! A source is anything that can yield `(locale, tree)` pairs for one client.
//! The generation pipeline only ever talks to the [`LocaleSource`] trait; every
//! heuristic about what the underlying data looks like lives behind it.
//!
//! # Components
//!
//! - [`LocaleSource`] - the seam: identity plus `(locale, tree)` entries
//! - [`Content`] - the external content model (templates, resolved callables,
//!   namespaces) and [`normalize`] to turn it into a [`ShapeNode`]
//! - [`StaticSource`] - in-memory source, useful for embedding and tests
//! - [`DirectorySource`] - locale files on disk (`json`, `yaml`, `toml`)
//!
//! # Resolved callables
//!
//! Some providers only expose message functions, not their template text. Such
//! a message is modelled as [`Content::Resolved`] with its arity and normalized
//! to a reconstructed template with one indexed placeholder per parameter,
//! joined by single spaces (`"{0} {1}"`). Labels are lost, so the generated
//! parameters are named `_0`, `_1`, ...

mod directory;

pub use directory::DirectorySource;

use crate::shape::ShapeNode;
use anyhow::Result;
use indexmap::IndexMap;

/// One locale's contribution to a client's shape tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Locale identifier, e.g. `en` or `de-AT`.
    pub locale: String,
    pub tree: ShapeNode,
}

impl LocaleEntry {
    pub fn new(locale: impl Into<String>, tree: ShapeNode) -> Self {
        Self {
            locale: locale.into(),
            tree,
        }
    }
}

/// A provider of locale entries for one client.
///
/// Implementations must be deterministic: loading unchanged data twice yields
/// the same entries in the same order.
pub trait LocaleSource: Send + Sync {
    /// Stable identity of the source, used for logging and caching.
    fn id(&self) -> &str;

    /// Loads every locale entry this source contributes.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying data is missing or unreadable.
    fn entries(&self) -> Result<Vec<LocaleEntry>>;
}

/// Localization content as exposed by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Raw template text.
    Template(String),
    /// A message function whose template text is unavailable.
    Resolved {
        /// Number of parameters the function expects.
        arity: usize,
    },
    /// A nested namespace.
    Namespace(IndexMap<String, Content>),
}

impl Content {
    pub fn template(text: impl Into<String>) -> Self {
        Self::Template(text.into())
    }

    pub fn namespace<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Content)>,
    {
        Self::Namespace(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Converts provider content into a shape tree.
#[must_use]
pub fn normalize(content: &Content) -> ShapeNode {
    match content {
        Content::Template(text) => ShapeNode::Leaf(text.clone()),
        Content::Resolved {
            arity,
        } => ShapeNode::Leaf(reconstruct_template(*arity)),
        Content::Namespace(children) => ShapeNode::Branch(
            children.iter().map(|(key, child)| (key.clone(), normalize(child))).collect(),
        ),
    }
}

/// Best-effort template for a callable with `arity` parameters: `"{0} {1} ..."`.
#[must_use]
pub fn reconstruct_template(arity: usize) -> String {
    (0..arity).map(|i| format!("{{{i}}}")).collect::<Vec<_>>().join(" ")
}

/// A source backed by content held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    id: String,
    entries: Vec<(String, Content)>,
}

impl StaticSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Adds the content for one locale. Entries are yielded in insertion order.
    #[must_use]
    pub fn with_entry(mut self, locale: impl Into<String>, content: Content) -> Self {
        self.entries.push((locale.into(), content));
        self
    }
}

impl LocaleSource for StaticSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn entries(&self) -> Result<Vec<LocaleEntry>> {
        Ok(self
            .entries
            .iter()
            .map(|(locale, content)| LocaleEntry::new(locale.clone(), normalize(content)))
            .collect())
    }
}
