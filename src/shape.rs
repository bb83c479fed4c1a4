//! Structural representation of a localization namespace.
//!
//! A [`ShapeNode`] is either a [`ShapeNode::Leaf`] holding a raw template string
//! or a [`ShapeNode::Branch`] mapping keys to further nodes. Branches preserve
//! insertion order so that generated declarations list keys in the order they
//! were first seen across all merged locale entries.
//!
//! Shape trees only drive declaration generation: the leaf text is representative
//! content used to discover placeholders, never rendered output.

use indexmap::IndexMap;

/// Ordered mapping from key to child node.
pub type Branch = IndexMap<String, ShapeNode>;

/// One level of a localization namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeNode {
    /// A raw template string, e.g. `"{0:user} is now a {1:role}"`.
    Leaf(String),
    /// A nested namespace.
    Branch(Branch),
}

impl ShapeNode {
    /// Creates an empty branch, the identity element of a merge.
    #[must_use]
    pub fn empty() -> Self {
        Self::Branch(Branch::new())
    }

    /// Creates a leaf from any string-like value.
    pub fn leaf(template: impl Into<String>) -> Self {
        Self::Leaf(template.into())
    }

    /// Builds a branch from `(key, node)` pairs, keeping their order.
    pub fn branch<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ShapeNode)>,
    {
        Self::Branch(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Returns the children of a branch, or `None` for a leaf.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the template text of a leaf, or `None` for a branch.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(template) => Some(template),
            Self::Branch(_) => None,
        }
    }

    /// Looks up a node by dotted path, e.g. `"errors.notFound"`.
    ///
    /// Keys containing dots cannot be addressed this way; use [`ShapeNode::as_branch`]
    /// and index directly instead.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&ShapeNode> {
        path.split('.').try_fold(self, |node, key| node.as_branch()?.get(key))
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => children.values().map(Self::leaf_count).sum(),
        }
    }
}

impl Default for ShapeNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for ShapeNode {
    fn from(template: &str) -> Self {
        Self::Leaf(template.to_string())
    }
}

impl From<String> for ShapeNode {
    fn from(template: String) -> Self {
        Self::Leaf(template)
    }
}
