//! Declaration emission.
//!
//! Renders a merged [`ShapeNode`] into a TypeScript global declaration block:
//!
//! ```text
//! declare global {
//!   namespace Localization {
//!     interface Messages {
//!       greeting: () => string;
//!       errors: {
//!         notFound: (path: string) => string;
//!       };
//!     }
//!   }
//! }
//! ```
//!
//! A leaf becomes `<key>: <signature>;` and a branch becomes `<key>: {` with its
//! children one level deeper, closed by `};`. Keys are emitted in the tree's
//! insertion order. [`DeclarationEmitter::render_file`] joins several blocks with
//! a blank line, tags each with `// client <n>` when there is more than one, and
//! terminates the file with the `export {};` marker that makes it a module.

use crate::constants::{DEFAULT_INTERFACE, DEFAULT_NAMESPACE, EXPORTS_MARKER, INDENT};
use crate::placeholder::parse_parameters;
use crate::shape::{Branch, ShapeNode};
use crate::signature::{property_key, render_signature};

/// Depth of interface members inside `declare global { namespace { interface {`.
const BODY_DEPTH: usize = 3;

/// Names used in the enclosing declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub namespace: String,
    pub interface: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            interface: DEFAULT_INTERFACE.to_string(),
        }
    }
}

/// Renders shape trees into declaration text.
#[derive(Debug, Clone, Default)]
pub struct DeclarationEmitter {
    options: EmitOptions,
}

impl DeclarationEmitter {
    #[must_use]
    pub const fn new(options: EmitOptions) -> Self {
        Self {
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Renders the interface body lines for `tree`, starting at `depth`.
    ///
    /// A leaf root has no keys and renders nothing.
    #[must_use]
    pub fn render_body(&self, tree: &ShapeNode, depth: usize) -> Vec<String> {
        let mut lines = Vec::new();
        if let ShapeNode::Branch(children) = tree {
            push_members(&mut lines, children, depth);
        }
        lines
    }

    /// Renders one complete `declare global` block, without a trailing newline.
    ///
    /// `ordinal` adds a `// client <n>` line above the block.
    #[must_use]
    pub fn render_block(&self, tree: &ShapeNode, ordinal: Option<usize>) -> String {
        let mut lines = Vec::new();
        if let Some(n) = ordinal {
            lines.push(format!("// client {n}"));
        }
        lines.push("declare global {".to_string());
        lines.push(format!("{}namespace {} {{", indent(1), self.options.namespace));
        lines.push(format!("{}interface {} {{", indent(2), self.options.interface));
        lines.extend(self.render_body(tree, BODY_DEPTH));
        lines.push(format!("{}}}", indent(2)));
        lines.push(format!("{}}}", indent(1)));
        lines.push("}".to_string());
        lines.join("\n")
    }

    /// Renders a standalone declaration file for one tree per client.
    ///
    /// Blocks are tagged with their 1-based position only when more than one
    /// tree is given. The result always ends with the exports marker and a
    /// newline.
    #[must_use]
    pub fn render_file(&self, trees: &[ShapeNode]) -> String {
        let tag = trees.len() > 1;
        let blocks: Vec<String> = trees
            .iter()
            .enumerate()
            .map(|(i, tree)| self.render_block(tree, tag.then_some(i + 1)))
            .collect();

        let mut out = blocks.join("\n\n");
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(EXPORTS_MARKER);
        out.push('\n');
        out
    }
}

fn push_members(lines: &mut Vec<String>, children: &Branch, depth: usize) {
    let pad = indent(depth);
    for (key, node) in children {
        let key = property_key(key);
        match node {
            ShapeNode::Leaf(template) => {
                let signature = render_signature(&parse_parameters(template));
                lines.push(format!("{pad}{key}: {signature};"));
            }
            ShapeNode::Branch(grandchildren) => {
                lines.push(format!("{pad}{key}: {{"));
                push_members(lines, grandchildren, depth + 1);
                lines.push(format!("{pad}}};"));
            }
        }
    }
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}
