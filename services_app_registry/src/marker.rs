//! Launcher marker files
//!
//! `Program Files` entries are ordinary file nodes whose content encodes an
//! application id as `appId:<id>`. Activating such a file in the explorer
//! looks the id up in the registry and asks the host shell to open that
//! application's window. This convention is the only coupling between the
//! file tree and the registry.

/// Prefix identifying launcher marker content
pub const MARKER_PREFIX: &str = "appId:";

/// File extension launcher markers carry
pub const MARKER_EXTENSION: &str = ".exe";

/// Encodes an application id as marker file content
pub fn marker_content(id: &str) -> String {
    format!("{MARKER_PREFIX}{id}")
}

/// Conventional file name for an app's launcher, e.g. `My Computer.exe`
pub fn marker_file_name(title: &str) -> String {
    format!("{title}{MARKER_EXTENSION}")
}

/// Extracts the application id from marker content
///
/// Returns `None` for content that is not a marker; an empty id is not a
/// marker either.
pub fn parse_marker(content: &str) -> Option<&str> {
    let id = content.strip_prefix(MARKER_PREFIX)?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

/// True when a file name looks like a launcher (`*.exe`)
pub fn is_launcher_name(name: &str) -> bool {
    name.ends_with(MARKER_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_round_trip() {
        let content = marker_content("my-computer");
        assert_eq!(content, "appId:my-computer");
        assert_eq!(parse_marker(&content), Some("my-computer"));
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert_eq!(parse_marker("Windows Notepad Application"), None);
        assert_eq!(parse_marker(""), None);
        assert_eq!(parse_marker("appId:"), None);
    }

    #[test]
    fn test_marker_file_name() {
        assert_eq!(marker_file_name("My Computer"), "My Computer.exe");
        assert!(is_launcher_name("My Computer.exe"));
        assert!(!is_launcher_name("README.md"));
    }
}
