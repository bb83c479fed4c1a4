//! Generation pipeline: sources in, declaration text out.
//!
//! For every source (one per client) the [`Generator`]:
//!
//! 1. loads the source's locale entries,
//! 2. merges their trees into one shape tree (last writer wins),
//! 3. renders the tree as a `declare global` block.
//!
//! Blocks are joined in source order with a blank line between them, tagged
//! with `// client <n>` when more than one source is given, and followed by the
//! `export {};` marker. Sources are never merged with each other.
//!
//! Loading happens before any text is rendered: if one source fails, the run
//! fails as a whole and no partial output is produced.

use crate::cache::SourceCache;
use crate::core::TypegenError;
use crate::emit::{DeclarationEmitter, EmitOptions};
use crate::merge::{merge_with_report, MergeReport};
use crate::shape::ShapeNode;
use crate::source::{LocaleEntry, LocaleSource};
use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// The merged tree of one client, with what the merge discarded.
#[derive(Debug, Clone)]
pub struct ClientTree {
    pub source_id: String,
    pub tree: ShapeNode,
    pub report: MergeReport,
}

/// Runs the generation pipeline with fixed emit options.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    emitter: DeclarationEmitter,
}

impl Generator {
    #[must_use]
    pub const fn new(options: EmitOptions) -> Self {
        Self {
            emitter: DeclarationEmitter::new(options),
        }
    }

    #[must_use]
    pub const fn emitter(&self) -> &DeclarationEmitter {
        &self.emitter
    }

    /// Generates the declaration file for `sources`, one block per source.
    ///
    /// # Errors
    ///
    /// Returns [`TypegenError::NoSources`] for an empty list, or the first
    /// source load error.
    pub fn generate(&self, sources: &[&dyn LocaleSource]) -> Result<String> {
        ensure_sources(sources.len())?;

        let trees = sources
            .iter()
            .map(|source| load_entries(*source).map(|entries| build_tree(source.id(), &entries)))
            .collect::<Result<Vec<_>>>()?;

        Ok(self.render(&trees))
    }

    /// Same as [`Generator::generate`], reusing entries held by `cache`.
    ///
    /// # Errors
    ///
    /// See [`Generator::generate`].
    pub fn generate_cached(
        &self,
        sources: &[&dyn LocaleSource],
        cache: &mut SourceCache,
    ) -> Result<String> {
        ensure_sources(sources.len())?;

        let mut trees = Vec::with_capacity(sources.len());
        for source in sources {
            let entries = cache.get_or_load(*source)?;
            trees.push(build_tree(source.id(), entries));
        }

        Ok(self.render(&trees))
    }

    /// Generates like [`Generator::generate`], loading sources concurrently.
    ///
    /// Each source is loaded and merged on the blocking thread pool; results are
    /// reassembled in the original source order before rendering.
    ///
    /// # Errors
    ///
    /// See [`Generator::generate`]. A panicking load task is reported as an error.
    pub async fn generate_concurrent(
        &self,
        sources: Vec<Arc<dyn LocaleSource>>,
    ) -> Result<String> {
        ensure_sources(sources.len())?;

        let tasks = sources.into_iter().map(|source| async move {
            let id = source.id().to_string();
            tokio::task::spawn_blocking(move || {
                load_entries(source.as_ref()).map(|entries| build_tree(source.id(), &entries))
            })
            .await
            .with_context(|| format!("Loading task for source '{id}' did not complete"))?
        });

        let trees = try_join_all(tasks).await?;
        Ok(self.render(&trees))
    }

    /// Renders already merged client trees.
    #[must_use]
    pub fn render(&self, clients: &[ClientTree]) -> String {
        let trees: Vec<ShapeNode> = clients.iter().map(|c| c.tree.clone()).collect();
        let output = self.emitter.render_file(&trees);
        info!(
            "Generated declarations for {} client(s), {} key(s)",
            clients.len(),
            clients.iter().map(|c| c.tree.leaf_count()).sum::<usize>()
        );
        output
    }
}

/// Merges the entries of one source into its client tree.
#[must_use]
pub fn build_tree(source_id: &str, entries: &[LocaleEntry]) -> ClientTree {
    let (tree, report) = merge_with_report(entries.iter().map(|e| &e.tree));
    debug!(
        "Merged {} locale entr{} for source '{source_id}'",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
    for path in &report.overwritten {
        debug!("Source '{source_id}': value at '{path}' overwritten by a later locale");
    }
    ClientTree {
        source_id: source_id.to_string(),
        tree,
        report,
    }
}

fn load_entries(source: &dyn LocaleSource) -> Result<Vec<LocaleEntry>> {
    source.entries().with_context(|| format!("Failed to load locale source '{}'", source.id()))
}

fn ensure_sources(count: usize) -> Result<()> {
    if count == 0 {
        return Err(TypegenError::NoSources.into());
    }
    Ok(())
}
