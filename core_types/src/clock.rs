//! Logical time and snapshot revisions
//!
//! The desktop core has no wall-clock dependency. Creation and modification
//! times on tree nodes are ticks of a [`LogicalClock`] owned by the tree
//! store; the store advances the clock exactly once per successful mutation
//! and stamps every touched node with that tick.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical-clock tick
///
/// Ticks are strictly increasing within a process. A node whose
/// `modified_at` is greater than another's was mutated later.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The tick assigned to seeded nodes
    pub const SEED: Timestamp = Timestamp(0);
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Identifies one snapshot of the authoritative tree
///
/// The seeded tree is revision 0; every successful mutation produces the
/// next revision. Failed operations never advance it, so two equal
/// revisions imply byte-identical trees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Revision(pub u64);

impl Revision {
    /// Returns the revision following this one
    pub fn next(self) -> Revision {
        Revision(self.0 + 1)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Strictly increasing tick source
///
/// There is exactly one clock per tree store. Handing out ticks through
/// `&mut self` keeps the ordering total without any synchronization.
#[derive(Debug, Clone, Default)]
pub struct LogicalClock {
    last: u64,
}

impl LogicalClock {
    /// Creates a clock whose first tick follows the seed timestamp
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns the next tick
    pub fn now(&mut self) -> Timestamp {
        self.last += 1;
        Timestamp(self.last)
    }

    /// The most recently issued tick without advancing
    pub fn last(&self) -> Timestamp {
        Timestamp(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_strictly_increase() {
        let mut clock = LogicalClock::new();
        let a = clock.now();
        let b = clock.now();
        let c = clock.now();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_first_tick_follows_seed() {
        let mut clock = LogicalClock::new();
        assert!(clock.now() > Timestamp::SEED);
    }

    #[test]
    fn test_last_does_not_advance() {
        let mut clock = LogicalClock::new();
        let a = clock.now();
        assert_eq!(clock.last(), a);
        assert_eq!(clock.last(), a);
    }

    #[test]
    fn test_revision_next() {
        let r = Revision::default();
        assert_eq!(r, Revision(0));
        assert_eq!(r.next(), Revision(1));
        assert_eq!(r.next().next(), Revision(2));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Timestamp(7).to_string(), "t7");
        assert_eq!(Revision(3).to_string(), "r3");
    }
}
