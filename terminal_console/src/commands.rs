//! Read-only command renderers
//!
//! These produce the output lines for the listing commands. They never
//! mutate the tree, so a dangling working directory simply renders the
//! not-found line instead of failing the session.

use fs_tree::{DrivePath, Node};
use services_tree_store::{TreeOperations, TreeStore};

pub(crate) const NOT_FOUND: &str = "Directory not found";

/// `help` output
pub(crate) fn help() -> Vec<String> {
    [
        "Available commands:",
        "  help          - Show this help message",
        "  ls / dir      - List directory contents",
        "  cd <dir>      - Change directory",
        "  pwd           - Print working directory",
        "  mkdir <dir>   - Create directory",
        "  touch <file>  - Create empty file",
        "  rm <file>     - Remove file",
        "  rmdir <dir>   - Remove directory",
        "  cat <file>    - Display file contents",
        "  echo <text>   - Display text, or write it with 'echo <text> > <file>'",
        "  tree          - Show directory structure",
        "  clear         - Clear the screen",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// `ls`: bare names, directories suffixed with `/`
pub(crate) fn ls(store: &TreeStore, path: &DrivePath) -> Vec<String> {
    let Some(nodes) = store.list(path) else {
        return vec![NOT_FOUND.to_string()];
    };
    nodes
        .iter()
        .map(|node| {
            if node.is_directory() {
                format!("{}/", node.name)
            } else {
                node.name.clone()
            }
        })
        .collect()
}

/// `dir`: the MS-DOS style listing with size and count columns
pub(crate) fn dir(store: &TreeStore, path: &DrivePath) -> Vec<String> {
    let Some(nodes) = store.list(path) else {
        return vec![NOT_FOUND.to_string()];
    };

    let mut lines = vec![format!("Directory of {path}"), String::new()];
    for node in &nodes {
        let stamp = format!("{:<12}", node.modified_at.to_string());
        if node.is_directory() {
            lines.push(format!("{stamp}    <DIR>          {}", node.name));
        } else {
            lines.push(format!("{stamp}         {:>8}     {}", node.size(), node.name));
        }
    }

    let files = nodes.iter().filter(|n| !n.is_directory()).count();
    let dirs = nodes.len() - files;
    lines.push(format!("               {files} File(s)"));
    lines.push(format!("               {dirs} Dir(s)   2,147,483,648 bytes free"));
    lines
}

/// `tree`: box-drawing rendering rooted at the working directory
pub(crate) fn tree(store: &TreeStore, path: &DrivePath) -> Vec<String> {
    let Some(root) = store.resolve(path) else {
        return vec![NOT_FOUND.to_string()];
    };
    let mut lines = vec![path.to_string()];
    render_subtree(root, "", true, &mut lines);
    lines
}

fn render_subtree(node: &Node, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let connector = if is_last { "└── " } else { "├── " };
    let display = if node.is_directory() {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    };
    lines.push(format!("{prefix}{connector}{display}"));

    if let Some(children) = node.children() {
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let count = children.len();
        for (index, child) in children.values().enumerate() {
            render_subtree(child, &child_prefix, index + 1 == count, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Timestamp;
    use fs_tree::Tree;

    fn path(segments: &[&str]) -> DrivePath {
        DrivePath::from_segments(segments).unwrap()
    }

    fn store() -> TreeStore {
        let at = Timestamp::SEED;
        let mut docs = Node::directory("docs", at);
        docs.insert_child(Node::file("a.txt", "hello", at), at);
        let mut root = Node::directory("C:", at);
        root.insert_child(docs, at);
        root.insert_child(Node::file("boot.ini", "x", at), at);
        let mut tree = Tree::new();
        tree.add_drive(root);
        TreeStore::new(tree, path(&["C:"]))
    }

    #[test]
    fn test_ls_marks_directories() {
        let store = store();
        assert_eq!(ls(&store, &path(&["C:"])), vec!["docs/", "boot.ini"]);
    }

    #[test]
    fn test_ls_of_missing_directory() {
        let store = store();
        assert_eq!(ls(&store, &path(&["C:", "ghost"])), vec![NOT_FOUND]);
    }

    #[test]
    fn test_dir_columns_and_counts() {
        let store = store();
        let lines = dir(&store, &path(&["C:"]));

        assert_eq!(lines[0], "Directory of C:");
        assert!(lines[2].contains("<DIR>") && lines[2].ends_with("docs"));
        assert!(lines[3].ends_with("boot.ini"));
        assert_eq!(lines[4], "               1 File(s)");
        assert!(lines[5].starts_with("               1 Dir(s)"));
    }

    #[test]
    fn test_tree_rendering() {
        let store = store();
        let lines = tree(&store, &path(&["C:"]));
        assert_eq!(
            lines,
            vec![
                "C:",
                "└── C:/",
                "    ├── boot.ini",
                "    └── docs/",
                "        └── a.txt",
            ]
        );
    }
}
