//! # Filesystem Tree
//!
//! The in-memory hierarchical tree behind the desktop's explorer and
//! terminal: drive-rooted paths, file/directory nodes, and the pure
//! resolver and lister every consumer reads through.
//!
//! This crate holds only the data model. Mutation with validation,
//! revisions, and seeding live in `services_tree_store`; this layer stays a
//! pure function of (tree, path).

pub mod node;
pub mod path;
pub mod tree;

pub use node::{Node, NodeKind, NodePayload};
pub use path::{DrivePath, PathError};
pub use tree::Tree;
