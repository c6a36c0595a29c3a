//! # Explorer Service
//!
//! The file-explorer application's session state: one navigation cursor per
//! open window plus the activation logic behind double-clicking an entry.
//!
//! The explorer renders purely from the shared tree store; it holds no copy
//! of the tree. Activating a launcher marker file (a `Program Files`
//! `.exe`) resolves the embedded app id against the registry and hands the
//! resulting [`ExplorerAction::LaunchApp`] to the host shell; the explorer
//! itself never opens windows.

use core_types::{SessionId, Timestamp};
use fs_tree::{DrivePath, Node, NodeKind};
use services_app_registry::{marker, AppDescriptor, AppRegistry};
use services_navigation::{NavigationCursor, NavigationError};
use services_tree_store::{TreeOperations, TreeStore};
use thiserror::Error;

/// Errors surfaced to the explorer window
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExplorerError {
    /// No entry of that name in the current directory
    #[error("Not found: {0}")]
    NotFound(String),

    /// A launcher marker names an app the registry does not know
    #[error("Unknown application: {0}")]
    UnknownApp(String),

    /// A navigation transition failed
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// What activating an entry asks the host shell to do
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerAction {
    /// The cursor moved into a subdirectory; re-render the listing
    EnteredDirectory(DrivePath),
    /// Show a plain file in the text viewer
    OpenText { name: String, content: String },
    /// Open the window for a registered application
    LaunchApp(AppDescriptor),
}

/// One row of an explorer listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub name: String,
    pub kind: NodeKind,
    pub size: usize,
    pub modified_at: Timestamp,
}

impl EntrySummary {
    fn from_node(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            kind: node.kind(),
            size: node.size(),
            modified_at: node.modified_at,
        }
    }
}

/// Session state for one open explorer window
#[derive(Debug)]
pub struct ExplorerSession {
    id: SessionId,
    cursor: NavigationCursor,
}

impl ExplorerSession {
    /// Opens a window at the store's default path
    pub fn open(store: &TreeStore) -> Self {
        Self::open_at(store.default_path().clone())
    }

    /// Opens a window at a specific path
    pub fn open_at(initial: DrivePath) -> Self {
        Self {
            id: SessionId::new(),
            cursor: NavigationCursor::new(initial),
        }
    }

    /// This window's session id
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Address-bar text, e.g. `C:\Users\Chrome`
    pub fn address_bar(&self) -> String {
        self.cursor.address()
    }

    /// The cursor's current path
    pub fn current_path(&self) -> &DrivePath {
        self.cursor.current_path()
    }

    /// Listing of the current directory in display order
    ///
    /// A dangling cursor path renders as an empty window rather than an
    /// error; the next navigation re-validates.
    pub fn entries(&self, store: &TreeStore) -> Vec<EntrySummary> {
        store
            .list(self.cursor.current_path())
            .map(|nodes| nodes.iter().map(|n| EntrySummary::from_node(n)).collect())
            .unwrap_or_default()
    }

    /// Handles activation (double-click) of a named entry
    pub fn activate(
        &mut self,
        store: &TreeStore,
        registry: &AppRegistry,
        name: &str,
    ) -> Result<ExplorerAction, ExplorerError> {
        let directory = store
            .resolve(self.cursor.current_path())
            .ok_or_else(|| ExplorerError::NotFound(name.to_string()))?;
        let entry = directory
            .child(name)
            .ok_or_else(|| ExplorerError::NotFound(name.to_string()))?;

        match entry.kind() {
            NodeKind::Directory => {
                self.cursor.navigate_into(store, name)?;
                Ok(ExplorerAction::EnteredDirectory(
                    self.cursor.current_path().clone(),
                ))
            }
            NodeKind::File => {
                let content = entry.content().unwrap_or_default();
                if marker::is_launcher_name(name) {
                    if let Some(app_id) = marker::parse_marker(content) {
                        let app = registry
                            .get(app_id)
                            .ok_or_else(|| ExplorerError::UnknownApp(app_id.to_string()))?;
                        return Ok(ExplorerAction::LaunchApp(app.clone()));
                    }
                }
                Ok(ExplorerAction::OpenText {
                    name: name.to_string(),
                    content: content.to_string(),
                })
            }
        }
    }

    /// Toolbar Back button
    pub fn back(&mut self, store: &TreeStore) -> Result<(), ExplorerError> {
        Ok(self.cursor.back(store)?)
    }

    /// Toolbar Forward button
    pub fn forward(&mut self, store: &TreeStore) -> Result<(), ExplorerError> {
        Ok(self.cursor.forward(store)?)
    }

    /// Toolbar Up button; silent no-op at a drive root
    pub fn up(&mut self, store: &TreeStore) -> Result<(), ExplorerError> {
        Ok(self.cursor.up(store)?)
    }
}
