//! # Desktop Contract Tests
//!
//! This crate provides "golden" tests for the behavior every desktop
//! consumer relies on, to ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: cross-consumer guarantees are written as code
//! - **Testability first**: contract tests fail when shared behavior changes
//! - **Mechanism not policy**: define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each contract has a module verifying it end to end:
//! - `shared_tree`: one authoritative tree, visible to every consumer
//! - `navigation`: per-consumer cursors stay independent and never dangle
//! - `launchers`: `Program Files` markers resolve through the registry

pub mod launchers;
pub mod navigation;
pub mod shared_tree;

/// Common fixtures for contract validation
pub mod test_helpers {
    use services_app_registry::AppRegistry;
    use services_tree_store::TreeStore;

    /// The user directory name every contract test boots with
    pub const TEST_USER: &str = "Chrome";

    /// Boots a fresh desktop: seeded store plus the builtin registry
    pub fn desktop() -> (TreeStore, AppRegistry) {
        let registry = AppRegistry::builtin();
        let store = TreeStore::seeded(&registry, TEST_USER)
            .unwrap_or_else(|err| panic!("seeded desktop must boot: {err}"));
        (store, registry)
    }
}
