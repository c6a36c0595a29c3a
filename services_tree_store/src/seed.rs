//! The fixed default tree
//!
//! Every session starts from the same Windows-like structure: system
//! directories, a `Program Files` directory populated from the application
//! registry, a documents directory with portfolio content, and a
//! per-session user directory. Nothing here persists; the tree is rebuilt
//! from scratch each time the desktop boots.

use core_types::Timestamp;
use fs_tree::{Node, Tree};
use serde::{Deserialize, Serialize};
use services_app_registry::{marker, AppRegistry};

/// The single drive of the default configuration
pub const DEFAULT_DRIVE: &str = "C:";

/// Name of the per-session home container under the drive root
pub const USERS_DIR: &str = "Users";

/// One portfolio entry in the seeded `projects.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tech: String,
    pub status: String,
    pub description: String,
}

impl ProjectRecord {
    fn new(
        id: &str,
        name: &str,
        icon: &str,
        kind: &str,
        tech: &str,
        status: &str,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            kind: kind.to_string(),
            tech: tech.to_string(),
            status: status.to_string(),
            description: description.to_string(),
        }
    }
}

/// The portfolio entries shipped in `C:\Documents\projects.json`
pub fn portfolio_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "ecommerce-platform",
            "E-Commerce Platform",
            "🛒",
            "Web Application",
            "React, Node.js, MongoDB",
            "Completed",
            "Full-stack e-commerce solution with payment integration",
        ),
        ProjectRecord::new(
            "task-management",
            "Task Management App",
            "📋",
            "Mobile App",
            "React Native, Firebase",
            "In Progress",
            "Cross-platform productivity app with real-time sync",
        ),
        ProjectRecord::new(
            "weather-dashboard",
            "Weather Dashboard",
            "🌤️",
            "Web Application",
            "Vue.js, Express, API",
            "Completed",
            "Interactive weather visualization with forecasting",
        ),
        ProjectRecord::new(
            "chat-application",
            "Chat Application",
            "💬",
            "Web Application",
            "Socket.io, React, Node.js",
            "Completed",
            "Real-time messaging app with group chat features",
        ),
    ]
}

/// Serializes the portfolio to the seeded JSON blob
fn projects_json() -> String {
    // Serializing a plain owned struct list cannot fail in practice; fall
    // back to an empty list rather than panicking the shell.
    serde_json::to_string_pretty(&portfolio_projects()).unwrap_or_else(|_| "[]".to_string())
}

const README_MD: &str = "# RetroDesk\n\nA Windows-style desktop environment.\n\n## Features\n- Unified File System\n- Independent Application Navigation\n- Multiple Applications\n";

const PROJECT_NOTES_TXT: &str = "RetroDesk - Development Progress Report\n=======================================\n\n[x] File System Architecture Complete\n[x] Independent Application Navigation\n[x] Terminal & Explorer Working\n";

const FRONTEND_TXT: &str = "Frontend Development Expertise\n=============================\n\nUI/UX Technologies:\n- React 18 + Hooks\n- Vue.js 3 + Composition API\n- Next.js + App Router\n";

const RESUME_PDF: &str = "Resume - Full Stack Developer\n=============================\n\nSUMMARY:\nExperienced full-stack developer with 5+ years in web development.\n";

const PROJECT_README_MD: &str = "# E-Commerce Platform\n\nFull-stack e-commerce solution built with modern technologies.\n\n## Tech Stack\n- React + TypeScript\n- Node.js + Express\n- MongoDB\n";

/// Builds the default tree for one session
///
/// Layout:
///
/// ```text
/// C:\
/// ├── Windows\System32\{notepad.exe, calc.exe}
/// ├── Program Files\<Title>.exe        (launcher markers from the registry)
/// ├── Documents\{README.md, project-notes.txt, projects.json}
/// └── Users\<user>\{projects\, skills\, resume.pdf}
/// ```
pub fn seed_tree(registry: &AppRegistry, user: &str) -> Tree {
    let at = Timestamp::SEED;
    let mut root = Node::directory(DEFAULT_DRIVE, at);

    // Windows\System32
    let mut system32 = Node::directory("System32", at);
    system32.insert_child(
        Node::file("notepad.exe", "Windows Notepad Application", at),
        at,
    );
    system32.insert_child(
        Node::file("calc.exe", "Windows Calculator Application", at),
        at,
    );
    let mut windows = Node::directory("Windows", at);
    windows.insert_child(system32, at);
    root.insert_child(windows, at);

    // Program Files: one launcher marker per registered application
    let mut program_files = Node::directory("Program Files", at);
    for app in registry.list_all() {
        program_files.insert_child(
            Node::file(
                marker::marker_file_name(&app.title),
                marker::marker_content(&app.id),
                at,
            ),
            at,
        );
    }
    root.insert_child(program_files, at);

    // Documents
    let mut documents = Node::directory("Documents", at);
    documents.insert_child(Node::file("README.md", README_MD, at), at);
    documents.insert_child(Node::file("project-notes.txt", PROJECT_NOTES_TXT, at), at);
    documents.insert_child(Node::file("projects.json", projects_json(), at), at);
    root.insert_child(documents, at);

    // Users\<user>
    let mut ecommerce = Node::directory("ecommerce-platform", at);
    ecommerce.insert_child(Node::file("README.md", PROJECT_README_MD, at), at);
    let mut projects = Node::directory("projects", at);
    projects.insert_child(ecommerce, at);

    let mut skills = Node::directory("skills", at);
    skills.insert_child(Node::file("frontend.txt", FRONTEND_TXT, at), at);

    let mut home = Node::directory(user, at);
    home.insert_child(projects, at);
    home.insert_child(skills, at);
    home.insert_child(Node::file("resume.pdf", RESUME_PDF, at), at);

    let mut users = Node::directory(USERS_DIR, at);
    users.insert_child(home, at);
    root.insert_child(users, at);

    let mut tree = Tree::new();
    tree.add_drive(root);
    tree
}
