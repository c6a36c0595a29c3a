//! Navigation-independence contract
//!
//! Every consumer owns its own cursor. Moving one never moves another,
//! and a cursor confronted with a path deleted elsewhere stays at its
//! last valid position instead of dangling.

#[cfg(test)]
mod tests {
    use crate::test_helpers::desktop;
    use services_explorer::ExplorerSession;
    use terminal_console::TerminalSession;

    #[test]
    fn test_explorer_navigation_leaves_terminal_in_place() {
        let (store, registry) = desktop();
        let mut explorer = ExplorerSession::open(&store);
        let terminal = TerminalSession::open(&store);

        explorer.activate(&store, &registry, "projects").unwrap();
        explorer
            .activate(&store, &registry, "ecommerce-platform")
            .unwrap();

        assert_eq!(
            explorer.address_bar(),
            "C:\\Users\\Chrome\\projects\\ecommerce-platform"
        );
        assert_eq!(terminal.prompt(), "C:\\Users\\Chrome>");
    }

    #[test]
    fn test_terminal_cd_leaves_explorer_in_place() {
        let (mut store, _) = desktop();
        let explorer = ExplorerSession::open(&store);
        let mut terminal = TerminalSession::open(&store);

        terminal.execute(&mut store, "cd skills");
        assert_eq!(terminal.prompt(), "C:\\Users\\Chrome\\skills>");
        assert_eq!(explorer.address_bar(), "C:\\Users\\Chrome");
    }

    #[test]
    fn test_two_explorer_windows_are_independent() {
        let (store, registry) = desktop();
        let mut first = ExplorerSession::open(&store);
        let second = ExplorerSession::open(&store);
        assert_ne!(first.id(), second.id());

        first.activate(&store, &registry, "skills").unwrap();
        assert_eq!(first.address_bar(), "C:\\Users\\Chrome\\skills");
        assert_eq!(second.address_bar(), "C:\\Users\\Chrome");
    }

    #[test]
    fn test_up_at_drive_root_is_a_noop_everywhere() {
        let (mut store, _) = desktop();
        let mut explorer = ExplorerSession::open(&store);
        let mut terminal = TerminalSession::open(&store);

        for _ in 0..4 {
            explorer.up(&store).unwrap();
            terminal.execute(&mut store, "cd ..");
        }
        assert_eq!(explorer.address_bar(), "C:");
        assert_eq!(terminal.prompt(), "C:>");
    }

    #[test]
    fn test_history_to_deleted_directory_does_not_dangle() {
        let (mut store, registry) = desktop();
        let mut explorer = ExplorerSession::open(&store);
        let mut terminal = TerminalSession::open(&store);

        terminal.execute(&mut store, "mkdir staging");
        explorer.activate(&store, &registry, "staging").unwrap();
        explorer.back(&store).unwrap();

        // The terminal deletes the directory the explorer has in history
        terminal.execute(&mut store, "rmdir staging");

        assert!(explorer.forward(&store).is_err());
        assert_eq!(explorer.address_bar(), "C:\\Users\\Chrome");
        assert!(!explorer.entries(&store).is_empty());
    }
}
