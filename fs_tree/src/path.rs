//! Drive-rooted paths
//!
//! Paths are ordered segment sequences whose first segment is a drive label
//! such as `C:`. Two paths are equal iff their segment sequences are equal;
//! comparison is case-sensitive. Display joins segments with a backslash
//! (`C:\Documents\projects.json`), purely a rendering convention.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while building a path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The empty path is invalid
    #[error("Invalid path: empty")]
    Empty,

    /// A segment is empty, relative, or contains a separator
    #[error("Invalid path segment: {0:?}")]
    InvalidSegment(String),
}

/// An absolute path from a drive label down to a node
///
/// `.` and `..` are rejected here; relative forms are resolved by the
/// navigation and command layers before a `DrivePath` is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrivePath {
    segments: Vec<String>,
}

impl DrivePath {
    /// Builds a path from owned segments, validating each one
    pub fn new(segments: Vec<String>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        for segment in &segments {
            if !Self::is_valid_segment(segment) {
                return Err(PathError::InvalidSegment(segment.clone()));
            }
        }
        Ok(Self { segments })
    }

    /// Convenience constructor from string slices
    ///
    /// # Examples
    ///
    /// ```
    /// use fs_tree::DrivePath;
    ///
    /// let path = DrivePath::from_segments(&["C:", "Documents"]).unwrap();
    /// assert_eq!(path.to_string(), "C:\\Documents");
    /// ```
    pub fn from_segments(segments: &[&str]) -> Result<Self, PathError> {
        Self::new(segments.iter().map(|s| s.to_string()).collect())
    }

    /// Returns true if `name` may appear as a path segment or entry name
    pub fn is_valid_segment(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('\\')
            && !name.contains('/')
            && !name.contains('\0')
    }

    /// The path segments, drive label first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments; always at least 1
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A path is never empty, but clippy expects the pair
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when the path is just a drive label
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// The drive label (first segment)
    pub fn drive(&self) -> &str {
        &self.segments[0]
    }

    /// The final segment
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The containing path, or `None` at a drive root
    pub fn parent(&self) -> Option<DrivePath> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Extends the path by one child segment
    pub fn child(&self, name: &str) -> Result<DrivePath, PathError> {
        if !Self::is_valid_segment(name) {
            return Err(PathError::InvalidSegment(name.to_string()));
        }
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(Self { segments })
    }
}

impl fmt::Display for DrivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("\\"))
    }
}
