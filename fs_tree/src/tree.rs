//! The drive-rooted tree with its pure resolver and lister
//!
//! Resolution and listing are pure functions of (tree, path): no
//! normalization, no side effects. Every consumer (explorer windows,
//! terminal sessions) reads through these two functions, which is what
//! makes two renderings of the same directory at the same revision
//! identical.

use crate::node::{Node, NodeKind};
use crate::path::DrivePath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from drive label to root directory node
///
/// The default desktop configuration has exactly one drive (`C:`), but the
/// type carries several.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    roots: BTreeMap<String, Node>,
}

impl Tree {
    /// Creates an empty tree with no drives
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a drive root; replaces an existing root of the same label
    ///
    /// The root node's name is the drive label.
    pub fn add_drive(&mut self, root: Node) {
        self.roots.insert(root.name.clone(), root);
    }

    /// The root node for a drive label
    pub fn drive(&self, label: &str) -> Option<&Node> {
        self.roots.get(label)
    }

    /// Drive labels in deterministic order
    pub fn drives(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    /// Resolves a path to a node
    ///
    /// The first segment must name a drive; each further segment must be a
    /// child of a directory. Pure read, no `.`/`..` handling.
    pub fn resolve(&self, path: &DrivePath) -> Option<&Node> {
        let mut current = self.roots.get(path.drive())?;
        for segment in &path.segments()[1..] {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Mutable variant of [`resolve`](Self::resolve); used only by the store
    pub fn resolve_mut(&mut self, path: &DrivePath) -> Option<&mut Node> {
        let mut current = self.roots.get_mut(path.drive())?;
        for segment in &path.segments()[1..] {
            current = current.children_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// True when the path resolves to a directory
    pub fn is_directory(&self, path: &DrivePath) -> bool {
        self.resolve(path).is_some_and(Node::is_directory)
    }

    /// Lists the immediate children of a directory
    ///
    /// Ordering is fixed: directories before files, ascending lexicographic
    /// (byte order) by name within each group. Returns `None` when the path
    /// does not resolve or resolves to a file; callers render that as empty.
    pub fn list(&self, path: &DrivePath) -> Option<Vec<&Node>> {
        let node = self.resolve(path)?;
        let children = node.children()?;

        let mut entries: Vec<&Node> = children.values().collect();
        entries.sort_by(|a, b| {
            let rank = |n: &Node| match n.kind() {
                NodeKind::Directory => 0u8,
                NodeKind::File => 1u8,
            };
            rank(a).cmp(&rank(b)).then_with(|| a.name.cmp(&b.name))
        });
        Some(entries)
    }
}
