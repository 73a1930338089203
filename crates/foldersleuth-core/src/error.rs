/// Error types for the core crate.
///
/// Traversal failures inside a scan are never returned as errors; they are
/// turned into [`LogEntry`](crate::model::LogEntry) values and the walk
/// carries on. The types here cover the few operations that can fail
/// outright.
use std::path::PathBuf;
use thiserror::Error;

/// Failures that happen before a traversal starts.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The chosen path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The chosen path could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The folder-selection collaborator failed for a reason other than the
    /// user cancelling.
    #[error("folder selection failed: {0}")]
    Picker(String),
}

/// Rejections from [`rename_record`](crate::model::rename::rename_record).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenameError {
    #[error("no file record at index {index} (list has {len})")]
    OutOfRange { index: usize, len: usize },

    /// Empty names and names containing `/` would corrupt `full_path`.
    #[error("invalid file name {0:?}")]
    InvalidName(String),
}

/// Failures while writing a scan report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}
