//! File and directory nodes
//!
//! A node is either a file carrying a text blob or a directory carrying a
//! name-keyed child map. The payload enum makes the kind invariant
//! structural: a file cannot have children and a directory cannot have
//! content.

use core_types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two kinds of tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Text blob leaf
    File,
    /// Named container of child nodes
    Directory,
}

/// Kind-specific node data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodePayload {
    /// File contents; plain text, default empty
    File { content: String },
    /// Children keyed by name; key uniqueness is the sibling-name invariant
    Directory { children: BTreeMap<String, Node> },
}

/// A file or directory in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Entry name, unique among siblings
    pub name: String,
    /// Tick at which the node was created
    pub created_at: Timestamp,
    /// Tick of the last mutation touching this node or a direct child
    pub modified_at: Timestamp,
    /// Kind-specific data
    pub payload: NodePayload,
}

impl Node {
    /// Creates a file node
    pub fn file(name: impl Into<String>, content: impl Into<String>, at: Timestamp) -> Self {
        Self {
            name: name.into(),
            created_at: at,
            modified_at: at,
            payload: NodePayload::File {
                content: content.into(),
            },
        }
    }

    /// Creates an empty directory node
    pub fn directory(name: impl Into<String>, at: Timestamp) -> Self {
        Self {
            name: name.into(),
            created_at: at,
            modified_at: at,
            payload: NodePayload::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    /// The node kind
    pub fn kind(&self) -> NodeKind {
        match self.payload {
            NodePayload::File { .. } => NodeKind::File,
            NodePayload::Directory { .. } => NodeKind::Directory,
        }
    }

    /// True for directory nodes
    pub fn is_directory(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    /// Display size: byte length of content for files, child count for
    /// directories. Not an invariant driver.
    pub fn size(&self) -> usize {
        match &self.payload {
            NodePayload::File { content } => content.len(),
            NodePayload::Directory { children } => children.len(),
        }
    }

    /// File content, or `None` for directories
    pub fn content(&self) -> Option<&str> {
        match &self.payload {
            NodePayload::File { content } => Some(content),
            NodePayload::Directory { .. } => None,
        }
    }

    /// Child map, or `None` for files
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.payload {
            NodePayload::Directory { children } => Some(children),
            NodePayload::File { .. } => None,
        }
    }

    /// Looks up a direct child by name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|c| c.get(name))
    }

    /// Mutable lookup of a direct child
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children_mut().and_then(|c| c.get_mut(name))
    }

    /// Stamps `modified_at`; used when a mutation touches a direct child
    pub fn touch(&mut self, at: Timestamp) {
        self.modified_at = at;
    }

    /// Mutable child map, or `None` for files
    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match &mut self.payload {
            NodePayload::Directory { children } => Some(children),
            NodePayload::File { .. } => None,
        }
    }

    /// Replaces file content and stamps `modified_at`
    ///
    /// Returns false without touching anything when this node is a
    /// directory.
    pub fn set_content(&mut self, new_content: impl Into<String>, at: Timestamp) -> bool {
        match &mut self.payload {
            NodePayload::File { content } => {
                *content = new_content.into();
                self.modified_at = at;
                true
            }
            NodePayload::Directory { .. } => false,
        }
    }

    /// Inserts a child and stamps this directory's `modified_at`
    ///
    /// Returns false without inserting when the name is already taken or
    /// this node is a file.
    pub fn insert_child(&mut self, child: Node, at: Timestamp) -> bool {
        let Some(children) = self.children_mut() else {
            return false;
        };
        if children.contains_key(&child.name) {
            return false;
        }
        children.insert(child.name.clone(), child);
        self.modified_at = at;
        true
    }

    /// Removes a child by name and stamps `modified_at` when it existed
    pub fn remove_child(&mut self, name: &str, at: Timestamp) -> Option<Node> {
        let removed = self.children_mut()?.remove(name);
        if removed.is_some() {
            self.modified_at = at;
        }
        removed
    }
}
