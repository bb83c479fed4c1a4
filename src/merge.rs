//! Structural merge of shape trees.
//!
//! Several locale entries of the same client (typically one per language) each
//! describe part of the client's key space. [`merge_all`] folds them into one
//! canonical tree:
//!
//! - an incoming branch is merged key by key into the accumulator, creating or
//!   replacing the accumulator's value with an empty branch first when it is not
//!   already a branch;
//! - an incoming leaf overwrites whatever the accumulator held at that key,
//!   including a whole subtree (last writer wins);
//! - keys absent from the incoming node are left untouched.
//!
//! An overwritten key keeps its original position, so key order reflects where
//! a key was first seen across all entries.
//!
//! Conflicts are never errors. [`merge_with_report`] additionally returns the
//! paths whose previous value was discarded, for callers that want to surface
//! them.

use crate::shape::{Branch, ShapeNode};
use tracing::debug;

/// Paths whose accumulated value was replaced during a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Dotted key paths, in the order the overwrites happened.
    pub overwritten: Vec<String>,
}

impl MergeReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overwritten.is_empty()
    }
}

/// Merges `incoming` into `acc` in place.
///
/// A non-branch `incoming` replaces `acc` entirely.
pub fn merge_into(acc: &mut ShapeNode, incoming: &ShapeNode) {
    merge_node(acc, incoming, "", &mut None);
}

/// Left-folds `nodes` into a single tree, starting from an empty branch.
///
/// Later nodes win on conflict.
pub fn merge_all<'a, I>(nodes: I) -> ShapeNode
where
    I: IntoIterator<Item = &'a ShapeNode>,
{
    let mut acc = ShapeNode::empty();
    for node in nodes {
        merge_into(&mut acc, node);
    }
    acc
}

/// Same as [`merge_all`], also reporting every discarded value.
///
/// A path is reported when its previous value is replaced by a value of a
/// different shape, or by a leaf with different text. Re-asserting an identical
/// leaf is not an overwrite.
pub fn merge_with_report<'a, I>(nodes: I) -> (ShapeNode, MergeReport)
where
    I: IntoIterator<Item = &'a ShapeNode>,
{
    let mut acc = ShapeNode::empty();
    let mut report = Some(MergeReport::default());
    for node in nodes {
        merge_node(&mut acc, node, "", &mut report);
    }
    (acc, report.unwrap_or_default())
}

fn merge_node(
    acc: &mut ShapeNode,
    incoming: &ShapeNode,
    path: &str,
    report: &mut Option<MergeReport>,
) {
    match incoming {
        ShapeNode::Branch(children) => {
            if !acc.is_branch() {
                record(report, path, acc);
                *acc = ShapeNode::empty();
            }
            if let ShapeNode::Branch(target) = acc {
                merge_children(target, children, path, report);
            }
        }
        ShapeNode::Leaf(_) => {
            if *acc != *incoming && !(path.is_empty() && is_empty_branch(acc)) {
                record(report, path, acc);
            }
            *acc = incoming.clone();
        }
    }
}

fn merge_children(
    target: &mut Branch,
    incoming: &Branch,
    path: &str,
    report: &mut Option<MergeReport>,
) {
    for (key, value) in incoming {
        let child_path = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };

        match target.get_mut(key) {
            Some(existing) => merge_node(existing, value, &child_path, report),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn is_empty_branch(node: &ShapeNode) -> bool {
    node.as_branch().is_some_and(Branch::is_empty)
}

fn record(report: &mut Option<MergeReport>, path: &str, previous: &ShapeNode) {
    let shown = if path.is_empty() { "<root>" } else { path };
    match previous {
        ShapeNode::Leaf(_) => debug!("Overwriting leaf at '{shown}'"),
        ShapeNode::Branch(children) => {
            debug!("Overwriting subtree at '{shown}' ({} keys)", children.len());
        }
    }
    if let Some(report) = report {
        report.overwritten.push(shown.to_string());
    }
}
