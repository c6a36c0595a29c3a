//! Launcher contract
//!
//! Every registered application has a marker file under `C:\Program Files`,
//! and activating a marker resolves back to that application's descriptor.
