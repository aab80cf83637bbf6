//! Depth-first manifest traversal
//!
//! The walker keeps an explicit work stack instead of recursing, so paths are
//! produced lazily, one per `next()` call.

use std::iter::FusedIterator;
use std::sync::Arc;

use crate::node::ManifestNode;
use crate::path::ResolvedPath;

/// Directory segments accumulated above a node
///
/// Never mutated: [`Prefix::child`] builds a new prefix, so sibling branches
/// cannot observe each other's segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix<'a> {
    segments: Arc<[&'a str]>,
}

impl<'a> Prefix<'a> {
    pub fn root() -> Self {
        Self {
            segments: Arc::from(Vec::new()),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn child(&self, segment: &'a str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self {
            segments: segments.into(),
        }
    }

    pub fn resolve(&self, filename: &str) -> ResolvedPath {
        let mut segments: Vec<&str> = self.segments.to_vec();
        segments.push(filename);
        ResolvedPath::from_segments(segments)
    }
}

impl Default for Prefix<'_> {
    fn default() -> Self {
        Self::root()
    }
}

impl<'a> FromIterator<&'a str> for Prefix<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

enum Pending<'a> {
    Node(&'a ManifestNode, Prefix<'a>),
    File(&'a str, Prefix<'a>),
}

/// Lazy iterator over every file reachable from a node
pub struct Walk<'a> {
    stack: Vec<Pending<'a>>,
}

/// Start a traversal of `node` below `prefix`
pub fn walk<'a>(node: &'a ManifestNode, prefix: Prefix<'a>) -> Walk<'a> {
    Walk {
        stack: vec![Pending::Node(node, prefix)],
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = ResolvedPath;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::File(name, prefix) => return Some(prefix.resolve(name)),
                Pending::Node(ManifestNode::Container { files, entries }, prefix) => {
                    // Pushed in reverse: files pop first, then subdirectories in order
                    for (key, child) in entries.iter().rev() {
                        self.stack.push(Pending::Node(child, prefix.child(key)));
                    }
                    for name in files.iter().rev() {
                        self.stack.push(Pending::File(name, prefix.clone()));
                    }
                }
                Pending::Node(ManifestNode::List(items), prefix) => {
                    for item in items.iter().rev() {
                        self.stack.push(Pending::Node(item, prefix.clone()));
                    }
                }
                Pending::Node(ManifestNode::Leaf, _) => {}
            }
        }

        None
    }
}

impl FusedIterator for Walk<'_> {}
