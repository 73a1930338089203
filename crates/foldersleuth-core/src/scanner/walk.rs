/// Sequential depth-first walk over a [`DirectoryHandle`] tree.
///
/// Entries are visited one at a time in the order the handle yields them.
/// Any failure inside a directory (listing it, reading an entry, stat-ing a
/// file) stops that directory only: the records already collected stay, one
/// log entry is emitted for the directory, and the walk resumes with the
/// parent's next entry.
use super::handle::{DirectoryHandle, EntryKind};
use crate::model::file_record::join_path;
use crate::model::{FileRecord, LogEntry};
use std::io;
use tracing::{debug, warn};

/// Receives scan events as they happen.
pub trait ScanSink {
    /// A traversal failure (or other event) to record.
    fn log(&mut self, entry: LogEntry);

    /// Called once per file record, before it is appended to the results.
    fn file_found(&mut self, _record: &FileRecord) {}
}

impl ScanSink for Vec<LogEntry> {
    fn log(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

/// Walk `root` and return every file found, in traversal order.
///
/// Never fails: errors are pushed to `sink` and the affected subtree is
/// skipped.
pub fn scan<H, S>(root: &H, sink: &mut S) -> Vec<FileRecord>
where
    H: DirectoryHandle,
    S: ScanSink + ?Sized,
{
    let mut walker = Walker {
        records: Vec::new(),
        sink,
    };
    walker.visit(root, "");
    debug!("Walk finished with {} records", walker.records.len());
    walker.records
}

struct Walker<'s, S: ?Sized> {
    records: Vec<FileRecord>,
    sink: &'s mut S,
}

impl<S: ScanSink + ?Sized> Walker<'_, S> {
    /// Visit the directory at root-relative `path` (empty for the root).
    fn visit<H: DirectoryHandle>(&mut self, dir: &H, path: &str) {
        if let Err(err) = self.visit_entries(dir, path) {
            let shown = if path.is_empty() { "<root>" } else { path };
            warn!("Skipping rest of {shown}: {err}");
            self.sink.log(LogEntry::traversal(path, &err));
        }
    }

    fn visit_entries<H: DirectoryHandle>(&mut self, dir: &H, path: &str) -> io::Result<()> {
        for entry in dir.entries()? {
            let entry = entry?;
            match entry.kind {
                EntryKind::File => {
                    let stat = dir.stat(&entry.name)?;
                    let record = FileRecord::new(path, &entry.name, stat.size, stat.modified);
                    self.sink.file_found(&record);
                    self.records.push(record);
                }
                EntryKind::Directory => {
                    let child = dir.open_dir(&entry.name)?;
                    self.visit(&child, &join_path(path, &entry.name));
                }
            }
        }
        Ok(())
    }
}
