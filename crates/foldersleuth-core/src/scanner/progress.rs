/// Scan progress reporting: messages sent from the scan thread to the UI
/// thread via a crossbeam channel, in emission order.
use crate::model::{FileRecord, LogEntry};
use std::time::Duration;

#[derive(Debug)]
pub enum ScanProgress {
    /// A log entry, forwarded the moment it is produced.
    Log(LogEntry),
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        total_size: u64,
        current_path: String,
    },
    /// Scanning finished. Ownership of the record list moves to the receiver.
    Complete {
        records: Vec<FileRecord>,
        duration: Duration,
    },
}
