//! Tree-store operations
//!
//! This module defines the operation surface of the tree store and its
//! error taxonomy. Every failure here is a recoverable domain error the
//! invoking UI collaborator renders inline; none aborts the process.

use fs_tree::{DrivePath, Node, PathError};
use thiserror::Error;

/// Errors produced by tree-store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsError {
    /// A supplied path does not resolve to the expected node kind
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A create operation targets a name already present among siblings
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A read/delete targets a name absent among siblings
    #[error("Not found: {0}")]
    NotFound(String),

    /// A file operation hit a directory entry
    #[error("Is a directory: {0}")]
    IsADirectory(String),

    /// A directory operation hit a file entry
    #[error("Is a file: {0}")]
    IsAFile(String),

    /// Delete requested on a directory that still has children
    #[error("Directory not empty: {0}")]
    DirectoryNotEmpty(String),

    /// Malformed path or entry name
    #[error("Path error: {0}")]
    Path(#[from] PathError),
}

/// Operations over the shared tree
///
/// Reads are pure; mutations validate first and apply atomically. `list`
/// returns children directories-first, lexicographic within each group, so
/// two consumers rendering the same directory at the same revision produce
/// identical listings.
pub trait TreeOperations {
    /// Resolves a path to a node; `None` when any segment is missing
    fn resolve(&self, path: &DrivePath) -> Option<&Node>;

    /// Lists a directory in display order; `None` for files and dangling
    /// paths (callers treat this as empty)
    fn list(&self, path: &DrivePath) -> Option<Vec<&Node>>;

    /// Creates a file under `path`
    fn create_file(
        &mut self,
        path: &DrivePath,
        name: &str,
        content: &str,
    ) -> Result<(), FsError>;

    /// Creates an empty directory under `path`
    fn create_directory(&mut self, path: &DrivePath, name: &str) -> Result<(), FsError>;

    /// Writes `content` to the file `name` under `path`, creating it when
    /// absent (upsert)
    fn write_file(&mut self, path: &DrivePath, name: &str, content: &str)
        -> Result<(), FsError>;

    /// Returns the content of the file `name` under `path`
    fn read_file(&self, path: &DrivePath, name: &str) -> Result<&str, FsError>;

    /// Removes the file or empty directory `name` under `path`
    fn delete_item(&mut self, path: &DrivePath, name: &str) -> Result<(), FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FsError::AlreadyExists("a.txt".to_string()).to_string(),
            "Already exists: a.txt"
        );
        assert_eq!(
            FsError::DirectoryNotEmpty("notes".to_string()).to_string(),
            "Directory not empty: notes"
        );
    }

    #[test]
    fn test_path_error_converts() {
        let err: FsError = PathError::Empty.into();
        assert_eq!(err, FsError::Path(PathError::Empty));
    }
}
