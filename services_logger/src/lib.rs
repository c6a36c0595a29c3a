//! # Logger Service
//!
//! This crate implements structured logging for the desktop core.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style. The
//! tree store records every mutation (and every rejected one) as an entry
//! with typed fields, so tests and diagnostics read events instead of
//! scraping strings.

use core_types::SessionId;
use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Source session (if known)
    pub source: Option<SessionId>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            source: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the source session
    pub fn with_source(mut self, source: SessionId) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Returns the value of a field, if present
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory log sink
///
/// The single-threaded core needs no channel or flushing; the owner appends
/// entries and observers read the slice.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Vec<LogEntry>,
}

impl MemoryLogger {
    /// Creates an empty logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn log(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// All recorded entries, oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries at or above a level
    pub fn entries_at(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level >= level)
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
