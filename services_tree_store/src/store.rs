//! The tree store
//!
//! Owns the authoritative tree, the logical clock, the revision counter,
//! and the mutation log. Consumers hold a reference to the store, never a
//! pointer into the tree.

use crate::operations::{FsError, TreeOperations};
use crate::seed;
use fs_tree::{DrivePath, Node, PathError, Tree};
use core_types::{LogicalClock, Revision};
use services_app_registry::AppRegistry;
use services_logger::{LogEntry, LogLevel, MemoryLogger};

/// Owner and sole writer of the shared file tree
#[derive(Debug)]
pub struct TreeStore {
    tree: Tree,
    clock: LogicalClock,
    revision: Revision,
    logger: MemoryLogger,
    default_path: DrivePath,
}

impl TreeStore {
    /// Wraps an existing tree; `default_path` seeds new navigation cursors
    pub fn new(tree: Tree, default_path: DrivePath) -> Self {
        Self {
            tree,
            clock: LogicalClock::new(),
            revision: Revision::default(),
            logger: MemoryLogger::new(),
            default_path,
        }
    }

    /// Builds the fixed default desktop tree
    ///
    /// `user` names the per-session directory under `C:\Users`; it must be a
    /// valid entry name.
    pub fn seeded(registry: &AppRegistry, user: &str) -> Result<Self, PathError> {
        let default_path =
            DrivePath::from_segments(&[seed::DEFAULT_DRIVE, seed::USERS_DIR, user])?;
        Ok(Self::new(seed::seed_tree(registry, user), default_path))
    }

    /// The revision of the current snapshot
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Default starting path for new consumers (the seeded user directory)
    pub fn default_path(&self) -> &DrivePath {
        &self.default_path
    }

    /// The mutation log, oldest entry first
    pub fn log(&self) -> &[LogEntry] {
        self.logger.entries()
    }

    /// True when the path resolves to a directory
    pub fn is_directory(&self, path: &DrivePath) -> bool {
        self.tree.is_directory(path)
    }

    /// Parent directory lookup shared by the mutation validations
    fn require_directory(&self, path: &DrivePath) -> Result<&Node, FsError> {
        self.tree
            .resolve(path)
            .filter(|node| node.is_directory())
            .ok_or_else(|| FsError::InvalidPath(path.to_string()))
    }

    /// Mutable parent access after validation has passed
    fn directory_mut(&mut self, path: &DrivePath) -> Result<&mut Node, FsError> {
        self.tree
            .resolve_mut(path)
            .ok_or_else(|| FsError::InvalidPath(path.to_string()))
    }

    fn validate_name(name: &str) -> Result<(), FsError> {
        if DrivePath::is_valid_segment(name) {
            Ok(())
        } else {
            Err(PathError::InvalidSegment(name.to_string()).into())
        }
    }

    /// Records one structured entry per mutation attempt
    fn record(&mut self, op: &str, path: &DrivePath, name: &str, result: &Result<(), FsError>) {
        let entry = match result {
            Ok(()) => LogEntry::new(LogLevel::Info, "mutation applied")
                .with_field("revision", self.revision.to_string()),
            Err(err) => {
                LogEntry::new(LogLevel::Warn, "mutation rejected").with_field("error", err.to_string())
            }
        };
        self.logger.log(
            entry
                .with_field("op", op)
                .with_field("path", path.to_string())
                .with_field("name", name),
        );
    }

    fn create_file_inner(
        &mut self,
        path: &DrivePath,
        name: &str,
        content: &str,
    ) -> Result<(), FsError> {
        Self::validate_name(name)?;
        let parent = self.require_directory(path)?;
        if parent.child(name).is_some() {
            return Err(FsError::AlreadyExists(name.to_string()));
        }

        let now = self.clock.now();
        let parent = self.directory_mut(path)?;
        parent.insert_child(Node::file(name, content, now), now);
        self.revision = self.revision.next();
        Ok(())
    }

    fn create_directory_inner(&mut self, path: &DrivePath, name: &str) -> Result<(), FsError> {
        Self::validate_name(name)?;
        let parent = self.require_directory(path)?;
        if parent.child(name).is_some() {
            return Err(FsError::AlreadyExists(name.to_string()));
        }

        let now = self.clock.now();
        let parent = self.directory_mut(path)?;
        parent.insert_child(Node::directory(name, now), now);
        self.revision = self.revision.next();
        Ok(())
    }

    fn write_file_inner(
        &mut self,
        path: &DrivePath,
        name: &str,
        content: &str,
    ) -> Result<(), FsError> {
        Self::validate_name(name)?;
        let parent = self.require_directory(path)?;
        if parent.child(name).is_some_and(Node::is_directory) {
            return Err(FsError::IsADirectory(name.to_string()));
        }

        let now = self.clock.now();
        let parent = self.directory_mut(path)?;
        match parent.child_mut(name) {
            Some(existing) => {
                existing.set_content(content, now);
                parent.touch(now);
            }
            None => {
                parent.insert_child(Node::file(name, content, now), now);
            }
        }
        self.revision = self.revision.next();
        Ok(())
    }

    fn delete_item_inner(&mut self, path: &DrivePath, name: &str) -> Result<(), FsError> {
        let parent = self.require_directory(path)?;
        let child = parent
            .child(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        if child.is_directory() && child.size() > 0 {
            return Err(FsError::DirectoryNotEmpty(name.to_string()));
        }

        let now = self.clock.now();
        let parent = self.directory_mut(path)?;
        parent.remove_child(name, now);
        self.revision = self.revision.next();
        Ok(())
    }
}

impl TreeOperations for TreeStore {
    fn resolve(&self, path: &DrivePath) -> Option<&Node> {
        self.tree.resolve(path)
    }

    fn list(&self, path: &DrivePath) -> Option<Vec<&Node>> {
        self.tree.list(path)
    }

    fn create_file(
        &mut self,
        path: &DrivePath,
        name: &str,
        content: &str,
    ) -> Result<(), FsError> {
        let result = self.create_file_inner(path, name, content);
        self.record("create_file", path, name, &result);
        result
    }

    fn create_directory(&mut self, path: &DrivePath, name: &str) -> Result<(), FsError> {
        let result = self.create_directory_inner(path, name);
        self.record("create_directory", path, name, &result);
        result
    }

    fn write_file(
        &mut self,
        path: &DrivePath,
        name: &str,
        content: &str,
    ) -> Result<(), FsError> {
        let result = self.write_file_inner(path, name, content);
        self.record("write_file", path, name, &result);
        result
    }

    fn read_file(&self, path: &DrivePath, name: &str) -> Result<&str, FsError> {
        let parent = self.require_directory(path)?;
        let child = parent
            .child(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        child
            .content()
            .ok_or_else(|| FsError::IsADirectory(name.to_string()))
    }

    fn delete_item(&mut self, path: &DrivePath, name: &str) -> Result<(), FsError> {
        let result = self.delete_item_inner(path, name);
        self.record("delete_item", path, name, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Timestamp;
    use fs_tree::NodeKind;

    fn path(segments: &[&str]) -> DrivePath {
        DrivePath::from_segments(segments).unwrap()
    }

    /// A minimal store: one drive, one empty `work` directory
    fn small_store() -> TreeStore {
        let mut root = Node::directory("C:", Timestamp::SEED);
        root.insert_child(Node::directory("work", Timestamp::SEED), Timestamp::SEED);
        let mut tree = Tree::new();
        tree.add_drive(root);
        TreeStore::new(tree, path(&["C:", "work"]))
    }

    #[test]
    fn test_create_file_and_read_back() {
        let mut store = small_store();
        store
            .create_file(&path(&["C:", "work"]), "a.txt", "hi")
            .unwrap();

        assert_eq!(store.read_file(&path(&["C:", "work"]), "a.txt"), Ok("hi"));
        let node = store.resolve(&path(&["C:", "work", "a.txt"])).unwrap();
        assert_eq!(node.kind(), NodeKind::File);
    }

    #[test]
    fn test_duplicate_create_fails_with_already_exists() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_file(&work, "a.txt", "").unwrap();

        assert_eq!(
            store.create_file(&work, "a.txt", "again"),
            Err(FsError::AlreadyExists("a.txt".to_string()))
        );
        assert_eq!(
            store.create_directory(&work, "a.txt"),
            Err(FsError::AlreadyExists("a.txt".to_string()))
        );
        // First write wins; the failed creates changed nothing
        assert_eq!(store.read_file(&work, "a.txt"), Ok(""));
    }

    #[test]
    fn test_create_under_missing_path_is_invalid_path() {
        let mut store = small_store();
        let result = store.create_file(&path(&["C:", "nowhere"]), "a.txt", "");
        assert!(matches!(result, Err(FsError::InvalidPath(_))));
    }

    #[test]
    fn test_create_under_file_is_invalid_path() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_file(&work, "a.txt", "").unwrap();

        let result = store.create_directory(&path(&["C:", "work", "a.txt"]), "sub");
        assert!(matches!(result, Err(FsError::InvalidPath(_))));
    }

    #[test]
    fn test_invalid_entry_name_rejected() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        assert!(matches!(
            store.create_file(&work, "a\\b.txt", ""),
            Err(FsError::Path(PathError::InvalidSegment(_)))
        ));
        assert!(matches!(
            store.create_directory(&work, ".."),
            Err(FsError::Path(PathError::InvalidSegment(_)))
        ));
    }

    #[test]
    fn test_write_file_upsert_is_idempotent() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.write_file(&work, "a.txt", "X").unwrap();
        store.write_file(&work, "a.txt", "X").unwrap();

        let listing = store.list(&work).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "a.txt");
        assert_eq!(store.read_file(&work, "a.txt"), Ok("X"));
    }

    #[test]
    fn test_write_file_round_trip() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        let content = "line one\nline two\n";
        store.write_file(&work, "notes.txt", content).unwrap();
        assert_eq!(store.read_file(&work, "notes.txt"), Ok(content));
    }

    #[test]
    fn test_write_over_directory_fails() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_directory(&work, "sub").unwrap();

        assert_eq!(
            store.write_file(&work, "sub", "oops"),
            Err(FsError::IsADirectory("sub".to_string()))
        );
    }

    #[test]
    fn test_read_file_errors() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_directory(&work, "sub").unwrap();

        assert_eq!(
            store.read_file(&work, "missing.txt"),
            Err(FsError::NotFound("missing.txt".to_string()))
        );
        assert_eq!(
            store.read_file(&work, "sub"),
            Err(FsError::IsADirectory("sub".to_string()))
        );
        assert!(matches!(
            store.read_file(&path(&["C:", "nope"]), "a.txt"),
            Err(FsError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_delete_file_and_empty_directory() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_file(&work, "a.txt", "").unwrap();
        store.create_directory(&work, "sub").unwrap();

        store.delete_item(&work, "a.txt").unwrap();
        store.delete_item(&work, "sub").unwrap();
        assert!(store.list(&work).unwrap().is_empty());
    }

    #[test]
    fn test_delete_non_empty_directory_refused_and_tree_unchanged() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_directory(&work, "sub").unwrap();
        store
            .create_file(&path(&["C:", "work", "sub"]), "a.txt", "hi")
            .unwrap();
        let revision_before = store.revision();

        assert_eq!(
            store.delete_item(&work, "sub"),
            Err(FsError::DirectoryNotEmpty("sub".to_string()))
        );
        assert_eq!(store.revision(), revision_before);
        assert_eq!(
            store.read_file(&path(&["C:", "work", "sub"]), "a.txt"),
            Ok("hi")
        );

        // Emptying the directory first makes the same call succeed
        store
            .delete_item(&path(&["C:", "work", "sub"]), "a.txt")
            .unwrap();
        store.delete_item(&work, "sub").unwrap();
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut store = small_store();
        assert_eq!(
            store.delete_item(&path(&["C:", "work"]), "ghost"),
            Err(FsError::NotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_revision_advances_only_on_success() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        assert_eq!(store.revision(), Revision(0));

        store.create_file(&work, "a.txt", "").unwrap();
        assert_eq!(store.revision(), Revision(1));

        let _ = store.create_file(&work, "a.txt", "");
        assert_eq!(store.revision(), Revision(1));

        store.write_file(&work, "a.txt", "x").unwrap();
        assert_eq!(store.revision(), Revision(2));
    }

    #[test]
    fn test_parent_modified_bumped_by_child_mutation() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_file(&work, "a.txt", "").unwrap();

        let parent = store.resolve(&work).unwrap();
        let child = parent.child("a.txt").unwrap();
        assert!(parent.modified_at >= child.modified_at);
        assert!(parent.modified_at > Timestamp::SEED);
    }

    #[test]
    fn test_mutation_log_records_applied_and_rejected() {
        let mut store = small_store();
        let work = path(&["C:", "work"]);
        store.create_file(&work, "a.txt", "").unwrap();
        let _ = store.create_file(&work, "a.txt", "");

        let log = store.log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].level, LogLevel::Info);
        assert_eq!(log[0].field("op"), Some("create_file"));
        assert_eq!(log[0].field("name"), Some("a.txt"));
        assert_eq!(log[0].field("revision"), Some("r1"));
        assert_eq!(log[1].level, LogLevel::Warn);
        assert_eq!(log[1].field("error"), Some("Already exists: a.txt"));
    }

    #[test]
    fn test_reads_do_not_advance_revision() {
        let store = small_store();
        let work = path(&["C:", "work"]);
        let _ = store.list(&work);
        let _ = store.resolve(&work);
        assert_eq!(store.revision(), Revision(0));
        assert!(store.log().is_empty());
    }
}
