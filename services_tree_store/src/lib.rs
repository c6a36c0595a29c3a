//! # Tree Store Service
//!
//! The service that owns the one authoritative file-tree snapshot and is its
//! sole writer. Explorer windows and terminal sessions all read and mutate
//! through this service, which is what keeps a `mkdir` typed in the terminal
//! immediately visible in an explorer listing of the same directory.
//!
//! ## Design
//!
//! - Every mutation is validated against the immutable tree before any
//!   change is applied, so a failed operation leaves the snapshot
//!   byte-identical and the revision unchanged.
//! - Mutations take `&mut self` and run to completion; in the
//!   single-threaded desktop that *is* the atomic-snapshot guarantee; no
//!   reader can observe a half-applied mutation.
//! - Each successful mutation advances the logical clock once, stamps the
//!   touched nodes, bumps the revision, and records a structured log entry.

pub mod operations;
pub mod seed;
pub mod store;

pub use operations::{FsError, TreeOperations};
pub use seed::{seed_tree, ProjectRecord, DEFAULT_DRIVE};
pub use store::TreeStore;
