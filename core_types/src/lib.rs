//! # Core Types
//!
//! This crate defines the fundamental types used throughout the RetroDesk
//! core: consumer session identity and the logical clock that stamps every
//! tree mutation.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: time and identity are values, never ambient
//!   globals.
//! - **Determinism first**: timestamps come from a logical clock owned by the
//!   tree store, so every test run observes the same ticks.
//!
//! ## Key Types
//!
//! - [`SessionId`]: Unique identifier for a consumer session (an explorer
//!   window or a terminal)
//! - [`Timestamp`]: A logical-clock tick
//! - [`LogicalClock`]: The strictly increasing tick source
//! - [`Revision`]: Snapshot counter for the authoritative tree

pub mod clock;
pub mod ids;

pub use clock::{LogicalClock, Revision, Timestamp};
pub use ids::SessionId;
