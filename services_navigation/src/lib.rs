//! # Navigation Service
//!
//! Per-consumer current-directory state. Every explorer window and every
//! terminal session owns its own [`NavigationCursor`]; cursors are
//! independent of the tree store and of each other, so two windows can
//! browse different directories of the same shared tree.
//!
//! A cursor never mutates the tree. It only reads it, to confirm that a
//! target path still resolves to a directory before committing a
//! transition, since the directory may have been deleted by another consumer
//! since the cursor last saw it.

use fs_tree::DrivePath;
use services_tree_store::TreeStore;
use thiserror::Error;

/// Errors produced by cursor transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The target path does not resolve to a directory (missing, or a file)
    #[error("Path not found: {0}")]
    InvalidPath(String),
}

/// Current path plus back/forward history for one consumer
///
/// The history is a linear list with a cursor index: navigating somewhere
/// new truncates the forward tail, exactly like a browser. Every
/// transition re-validates its target against the live tree and leaves the
/// cursor at its last valid path on failure, so it never dangles.
#[derive(Debug, Clone)]
pub struct NavigationCursor {
    current: DrivePath,
    history: Vec<DrivePath>,
    index: usize,
}

impl NavigationCursor {
    /// Creates a cursor at `initial`, which becomes the first history entry
    pub fn new(initial: DrivePath) -> Self {
        Self {
            current: initial.clone(),
            history: vec![initial],
            index: 0,
        }
    }

    /// The cursor's current path
    pub fn current_path(&self) -> &DrivePath {
        &self.current
    }

    /// Address-bar rendering, e.g. `C:\Users\Chrome`
    pub fn address(&self) -> String {
        self.current.to_string()
    }

    /// Number of recorded history entries
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True when `back` has somewhere to go
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// True when `forward` has somewhere to go
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }

    /// Navigates to an absolute path
    ///
    /// On success the forward history past the current index is dropped and
    /// `path` is appended. On failure nothing changes.
    pub fn navigate_to(
        &mut self,
        store: &TreeStore,
        path: DrivePath,
    ) -> Result<(), NavigationError> {
        if !store.is_directory(&path) {
            return Err(NavigationError::InvalidPath(path.to_string()));
        }
        self.history.truncate(self.index + 1);
        self.history.push(path.clone());
        self.index += 1;
        self.current = path;
        Ok(())
    }

    /// Navigates into a direct child directory
    pub fn navigate_into(
        &mut self,
        store: &TreeStore,
        name: &str,
    ) -> Result<(), NavigationError> {
        let target = self
            .current
            .child(name)
            .map_err(|_| NavigationError::InvalidPath(name.to_string()))?;
        self.navigate_to(store, target)
    }

    /// Navigates to the parent directory; a silent no-op at a drive root
    pub fn up(&mut self, store: &TreeStore) -> Result<(), NavigationError> {
        match self.current.parent() {
            Some(parent) => self.navigate_to(store, parent),
            None => Ok(()),
        }
    }

    /// Steps back in history; a no-op at the oldest entry
    ///
    /// The target is re-validated against the live tree: if another
    /// consumer deleted it, the cursor stays where it is and reports the
    /// failure.
    pub fn back(&mut self, store: &TreeStore) -> Result<(), NavigationError> {
        if self.index == 0 {
            return Ok(());
        }
        let target = &self.history[self.index - 1];
        if !store.is_directory(target) {
            return Err(NavigationError::InvalidPath(target.to_string()));
        }
        self.index -= 1;
        self.current = self.history[self.index].clone();
        Ok(())
    }

    /// Steps forward in history; a no-op at the newest entry
    pub fn forward(&mut self, store: &TreeStore) -> Result<(), NavigationError> {
        if self.index + 1 >= self.history.len() {
            return Ok(());
        }
        let target = &self.history[self.index + 1];
        if !store.is_directory(target) {
            return Err(NavigationError::InvalidPath(target.to_string()));
        }
        self.index += 1;
        self.current = self.history[self.index].clone();
        Ok(())
    }
}
