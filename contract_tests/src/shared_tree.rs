//! Shared-tree contract
//!
//! There is exactly one authoritative tree. A mutation issued by any
//! consumer is visible to every other consumer on its next read, and a
//! rejected mutation is visible to nobody.

#[cfg(test)]
mod tests {
    use crate::test_helpers::desktop;
    use fs_tree::DrivePath;
    use services_explorer::{ExplorerAction, ExplorerSession};
    use services_tree_store::{ProjectRecord, TreeOperations};
    use terminal_console::{LineKind, TerminalSession};

    fn path(segments: &[&str]) -> DrivePath {
        DrivePath::from_segments(segments).unwrap()
    }

    #[test]
    fn test_terminal_mkdir_is_visible_in_explorer() {
        let (mut store, registry) = desktop();
        let mut terminal = TerminalSession::open(&store);
        let explorer = ExplorerSession::open(&store);

        terminal.execute(&mut store, "mkdir shared-notes");

        let names: Vec<String> = explorer
            .entries(&store)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert!(names.contains(&"shared-notes".to_string()));

        // And the explorer can enter what the terminal created
        let mut explorer = explorer;
        let action = explorer
            .activate(&store, &registry, "shared-notes")
            .unwrap();
        assert!(matches!(action, ExplorerAction::EnteredDirectory(_)));
    }

    #[test]
    fn test_explorer_reads_what_terminal_wrote() {
        let (mut store, registry) = desktop();
        let mut terminal = TerminalSession::open(&store);
        let mut explorer = ExplorerSession::open(&store);

        terminal.execute(&mut store, "echo from the terminal > note.txt");

        let action = explorer.activate(&store, &registry, "note.txt").unwrap();
        assert_eq!(
            action,
            ExplorerAction::OpenText {
                name: "note.txt".to_string(),
                content: "from the terminal".to_string(),
            }
        );
    }

    #[test]
    fn test_rejected_mutation_is_invisible_everywhere() {
        let (mut store, _) = desktop();
        let mut terminal = TerminalSession::open(&store);
        let explorer = ExplorerSession::open(&store);

        let revision_before = store.revision();
        let entries_before = explorer.entries(&store).len();

        // `projects` is seeded; the duplicate create is rejected
        terminal.execute(&mut store, "mkdir projects");
        let last = terminal.transcript().last().unwrap();
        assert_eq!(last.kind, LineKind::Error);

        assert_eq!(store.revision(), revision_before);
        assert_eq!(explorer.entries(&store).len(), entries_before);
    }

    #[test]
    fn test_seeded_portfolio_json_contract() {
        // Both consumers read the same JSON document under C:\Documents
        let (store, registry) = desktop();

        let mut explorer = ExplorerSession::open_at(path(&["C:", "Documents"]));
        let action = explorer
            .activate(&store, &registry, "projects.json")
            .unwrap();
        let ExplorerAction::OpenText { content, .. } = action else {
            panic!("projects.json must open as text");
        };
        let records: Vec<ProjectRecord> = serde_json::from_str(&content).unwrap();
        assert!(!records.is_empty());

        let via_terminal = store
            .read_file(&path(&["C:", "Documents"]), "projects.json")
            .unwrap();
        assert_eq!(via_terminal, content);
    }

    #[test]
    fn test_listing_identical_across_consumers() {
        let (mut store, _) = desktop();
        let mut terminal = TerminalSession::open(&store);
        let explorer = ExplorerSession::open(&store);

        terminal.execute(&mut store, "touch b.txt");
        terminal.execute(&mut store, "mkdir alpha");
        terminal.execute(&mut store, "clear");
        terminal.execute(&mut store, "ls");

        let terminal_names: Vec<String> = terminal
            .transcript()
            .iter()
            .filter(|l| l.kind == LineKind::Output)
            .map(|l| l.text.trim_end_matches('/').to_string())
            .collect();
        let explorer_names: Vec<String> = explorer
            .entries(&store)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(terminal_names, explorer_names);
    }
}
