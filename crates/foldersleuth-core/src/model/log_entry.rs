/// Scan log entries: traversal errors and user-facing informational events.
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Path label used when the scan root itself cannot be read.
pub const ROOT_LABEL: &str = "Root";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Free-form tag: an I/O error class, [`LogEntry::INFO`] or [`LogEntry::SYSTEM`].
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub const INFO: &'static str = "Info";
    pub const SYSTEM: &'static str = "System";

    pub fn new(kind: impl Into<String>, path: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// An informational event tied to a path (e.g. a rename).
    pub fn info(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Self::INFO, Some(path.into()), message)
    }

    /// A top-level failure not tied to any scanned path.
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(Self::SYSTEM, None, message)
    }

    /// A traversal failure while reading the directory at `dir_path`.
    ///
    /// The tag is the I/O error kind (`PermissionDenied`, `NotFound`, ...).
    /// An empty `dir_path` is the scan root and is logged as [`ROOT_LABEL`].
    pub fn traversal(dir_path: &str, err: &std::io::Error) -> Self {
        let path = if dir_path.is_empty() {
            ROOT_LABEL.to_string()
        } else {
            dir_path.to_string()
        };
        Self::new(format!("{:?}", err.kind()), Some(path), err.to_string())
    }

    /// Everything except `Info` is shown as a problem.
    pub fn is_error(&self) -> bool {
        self.kind != Self::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn traversal_entry_uses_error_kind() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let entry = LogEntry::traversal("photos/private", &err);
        assert_eq!(entry.kind, "PermissionDenied");
        assert_eq!(entry.path.as_deref(), Some("photos/private"));
        assert_eq!(entry.message, "access denied");
        assert!(entry.is_error());
    }

    #[test]
    fn traversal_at_root_uses_root_label() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let entry = LogEntry::traversal("", &err);
        assert_eq!(entry.path.as_deref(), Some(ROOT_LABEL));
        assert_eq!(entry.kind, "NotFound");
    }

    #[test]
    fn info_is_not_an_error() {
        let entry = LogEntry::info("b.png", "Renamed a.txt to b.png");
        assert!(!entry.is_error());
    }

    #[test]
    fn system_entry_serialises_without_path() {
        let json = serde_json::to_value(LogEntry::system("boom")).unwrap();
        assert_eq!(json["type"], "System");
        assert!(json.get("path").is_none());
    }
}
