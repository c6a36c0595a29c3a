//! # Application Registry
//!
//! Static mapping from application identifier to display metadata (title,
//! icon, default window size). The desktop, start menu, and taskbar render
//! from this table; the file tree's `Program Files` directory carries one
//! launcher marker file per registered app.
//!
//! ## Philosophy
//!
//! The registry is read-only for the lifetime of the process and is *not*
//! part of the mutable tree. The single bridge between the two worlds is the
//! marker-content convention in [`marker`]: a launcher file whose content is
//! `appId:<id>` names an entry here.

pub mod marker;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Start-menu grouping for an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    /// Shell-level tools (explorer, terminal, settings)
    System,
    /// Portfolio/project viewers
    Project,
    /// Small utilities and toys
    Utility,
    /// Everything else
    Other,
}

/// Display metadata for a launchable application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Stable identifier, e.g. `my-computer`
    pub id: String,
    /// Window title
    pub title: String,
    /// Emoji icon shown on the desktop and in menus
    pub icon: String,
    /// Default window width in pixels
    pub width: u32,
    /// Default window height in pixels
    pub height: u32,
    /// Start-menu category
    pub category: AppCategory,
}

/// The static application table
pub struct AppRegistry {
    apps: HashMap<String, AppDescriptor>,
    desktop: Vec<String>,
}

impl AppRegistry {
    /// Creates an empty registry (tests compose their own tables)
    pub fn new() -> Self {
        Self {
            apps: HashMap::new(),
            desktop: Vec::new(),
        }
    }

    /// The fixed table of built-in desktop applications
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let entries = [
            ("my-computer", "My Computer", "💻", 500, 350, AppCategory::System),
            ("projects", "Projects", "📁", 800, 550, AppCategory::Project),
            ("whoami", "About Me", "👤", 480, 360, AppCategory::Utility),
            ("terminal", "Terminal", "🖥", 600, 400, AppCategory::System),
            ("recycle-bin", "Recycle Bin", "🗑️", 500, 300, AppCategory::System),
            ("contact", "Contact", "📧", 400, 300, AppCategory::Utility),
            ("help", "Help", "❓", 500, 400, AppCategory::Utility),
            ("settings", "Settings", "⚙️", 450, 350, AppCategory::System),
            ("minesweeper", "Minefield", "💣", 500, 600, AppCategory::Utility),
        ];
        for (id, title, icon, width, height, category) in entries {
            registry.register(AppDescriptor {
                id: id.to_string(),
                title: title.to_string(),
                icon: icon.to_string(),
                width,
                height,
                category,
            });
        }
        registry.desktop = [
            "my-computer",
            "projects",
            "whoami",
            "terminal",
            "recycle-bin",
            "minesweeper",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        registry
    }

    /// Adds a descriptor; replaces an existing entry of the same id
    pub fn register(&mut self, descriptor: AppDescriptor) {
        self.apps.insert(descriptor.id.clone(), descriptor);
    }

    /// Looks up an application by id
    pub fn get(&self, id: &str) -> Option<&AppDescriptor> {
        self.apps.get(id)
    }

    /// All descriptors, sorted by id for deterministic rendering
    pub fn list_all(&self) -> Vec<&AppDescriptor> {
        let mut apps: Vec<&AppDescriptor> = self.apps.values().collect();
        apps.sort_by(|a, b| a.id.cmp(&b.id));
        apps
    }

    /// Descriptors in one start-menu category, sorted by id
    pub fn list_by_category(&self, category: AppCategory) -> Vec<&AppDescriptor> {
        let mut apps: Vec<&AppDescriptor> = self
            .apps
            .values()
            .filter(|app| app.category == category)
            .collect();
        apps.sort_by(|a, b| a.id.cmp(&b.id));
        apps
    }

    /// Ids of the apps whose icons sit on the desktop, in layout order
    pub fn desktop_apps(&self) -> Vec<&str> {
        self.desktop.iter().map(String::as_str).collect()
    }

    /// Number of registered applications
    pub fn count(&self) -> usize {
        self.apps.len()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}
