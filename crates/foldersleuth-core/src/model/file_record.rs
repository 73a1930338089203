/// One scanned file.
///
/// Records are produced by the scanner as a flat list in traversal order and
/// are treated as values afterwards. The only in-place change is a rename,
/// which refreshes every field derived from the name.
use crate::analysis::categorizer::{categorize, Category};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Base file name including extension.
    pub name: String,
    /// `/`-joined path from the scan root, excluding the root's own name.
    pub full_path: String,
    pub size_bytes: u64,
    #[serde(serialize_with = "serialize_millis")]
    pub last_modified: DateTime<Utc>,
    /// Text after the final `.` of `name`; empty if there is none.
    pub extension: String,
    pub category: Category,
    pub is_hidden: bool,
}

impl FileRecord {
    /// Build a record for the file `name` found under `parent_path`.
    ///
    /// `parent_path` is root-relative; an empty string means the scan root.
    pub fn new(parent_path: &str, name: &str, size_bytes: u64, modified: SystemTime) -> Self {
        Self {
            name: name.to_string(),
            full_path: join_path(parent_path, name),
            size_bytes,
            last_modified: DateTime::<Utc>::from(modified),
            extension: extension_of(name).to_string(),
            category: categorize(name),
            is_hidden: is_hidden_name(name),
        }
    }

    /// Root-relative path of the directory containing this file.
    pub fn parent_path(&self) -> &str {
        match self.full_path.rfind('/') {
            Some(pos) => &self.full_path[..pos],
            None => "",
        }
    }
}

/// Join a root-relative parent path and an entry name with `/`.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// RFC 3339 in UTC with exactly three fractional digits, the format every
/// timestamp in an export uses.
pub fn rfc3339_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&rfc3339_millis(at))
}

/// Undotted extension: the text after the last `.`, or empty.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map_or("", |pos| &name[pos + 1..])
}

pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
