/// The single controller that owns a session's scan results.
///
/// Records and log entries change only through [`ScanSession`] methods:
/// starting a scan, finishing one, logging, and renaming. Everything
/// displayed (summary, tree, report) is derived from the current state on
/// demand.
use crate::analysis::summary::{summarize, Summary};
use crate::error::RenameError;
use crate::model::rename::rename_record;
use crate::model::{FileRecord, FileTree, LogEntry};
use crate::report::ScanReport;
use crate::scanner::{scan, FolderPicker, PickOutcome};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct ScanSession {
    root_name: Option<String>,
    records: Vec<FileRecord>,
    logs: Vec<LogEntry>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name of the most recently selected folder.
    pub fn root_name(&self) -> Option<&str> {
        self.root_name.as_deref()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Log entries in the order they were produced.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn has_results(&self) -> bool {
        !self.records.is_empty()
    }

    /// Forget the previous scan and prepare for a new one of `root_name`.
    pub fn begin_scan(&mut self, root_name: impl Into<String>) {
        self.root_name = Some(root_name.into());
        self.records.clear();
        self.logs.clear();
    }

    pub fn push_log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
    }

    /// Record a top-level failure as a single `System` entry.
    pub fn log_system(&mut self, message: impl Into<String>) {
        let entry = LogEntry::system(message);
        warn!("{}", entry.message);
        self.logs.push(entry);
    }

    /// Replace the record list wholesale with a finished scan's output.
    pub fn finish_scan(&mut self, records: Vec<FileRecord>) {
        self.records = records;
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.records)
    }

    pub fn tree(&self) -> FileTree {
        FileTree::from_records(&self.records)
    }

    /// Rename the record at `index`, appending the resulting `Info` entry.
    ///
    /// Returns `Ok(false)` when the name was unchanged.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<bool, RenameError> {
        match rename_record(&mut self.records, index, new_name)? {
            Some(entry) => {
                self.logs.push(entry);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn report(&self, generated_at: DateTime<Utc>) -> ScanReport<'_> {
        ScanReport::new(&self.records, generated_at)
    }

    /// Ask `picker` for a scan root.
    ///
    /// A cancelled pick leaves the session untouched and logs nothing. A
    /// failed pick is logged as one `System` entry and leaves the previous
    /// results in place. Either way there is nothing to scan.
    pub fn pick<P: FolderPicker>(&mut self, picker: &P) -> Option<(String, P::Handle)> {
        match picker.pick() {
            Ok(PickOutcome::Picked { name, root }) => Some((name, root)),
            Ok(PickOutcome::Cancelled) => {
                info!("Folder selection cancelled");
                None
            }
            Err(e) => {
                self.log_system(e.to_string());
                None
            }
        }
    }

    /// Pick a folder and scan it on the calling thread.
    pub fn run<P: FolderPicker>(&mut self, picker: &P) {
        let Some((name, root)) = self.pick(picker) else {
            return;
        };
        info!("Scanning {name}");
        self.begin_scan(name);
        let records = scan(&root, &mut self.logs);
        self.finish_scan(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Category;
    use crate::error::ScanError;
    use crate::scanner::{DirectoryHandle, Entry, FileStat};
    use crate::scanner::handle::Entries;
    use std::io;
    use std::time::UNIX_EPOCH;

    /// A flat directory of files with fixed sizes.
    struct Flat(Vec<(&'static str, u64)>);

    impl DirectoryHandle for Flat {
        fn entries(&self) -> io::Result<Entries<'_>> {
            Ok(Box::new(self.0.iter().map(|(n, _)| Ok(Entry::file(*n)))))
        }

        fn open_dir(&self, _name: &str) -> io::Result<Self> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no subdirectories"))
        }

        fn stat(&self, name: &str) -> io::Result<FileStat> {
            let size = self
                .0
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, s)| *s)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))?;
            Ok(FileStat {
                size,
                modified: UNIX_EPOCH,
            })
        }
    }

    enum Fake {
        Cancel,
        Fail,
        Pick(Vec<(&'static str, u64)>),
    }

    impl FolderPicker for Fake {
        type Handle = Flat;

        fn pick(&self) -> Result<PickOutcome<Flat>, ScanError> {
            match self {
                Fake::Cancel => Ok(PickOutcome::Cancelled),
                Fake::Fail => Err(ScanError::Picker("dialog crashed".into())),
                Fake::Pick(files) => Ok(PickOutcome::Picked {
                    name: "picked".into(),
                    root: Flat(files.clone()),
                }),
            }
        }
    }

    #[test]
    fn cancelled_pick_changes_nothing() {
        let mut session = ScanSession::new();
        session.run(&Fake::Pick(vec![("a.txt", 1)]));
        session.run(&Fake::Cancel);

        assert_eq!(session.records().len(), 1);
        assert!(session.logs().is_empty());
        assert_eq!(session.root_name(), Some("picked"));
    }

    #[test]
    fn failed_pick_logs_one_system_entry() {
        let mut session = ScanSession::new();
        session.run(&Fake::Fail);

        assert_eq!(session.logs().len(), 1);
        assert_eq!(session.logs()[0].kind, LogEntry::SYSTEM);
        assert!(session.logs()[0].message.contains("dialog crashed"));
        assert!(!session.has_results());
    }

    #[test]
    fn pick_hands_back_the_root_without_scanning() {
        let mut session = ScanSession::new();
        let (name, root) = session
            .pick(&Fake::Pick(vec![("a.txt", 1)]))
            .expect("picked");

        assert_eq!(name, "picked");
        assert_eq!(root.0.len(), 1);
        assert!(!session.has_results());
        assert!(session.logs().is_empty());

        assert!(session.pick(&Fake::Cancel).is_none());
        assert!(session.logs().is_empty());
        assert!(session.pick(&Fake::Fail).is_none());
        assert_eq!(session.logs().len(), 1);
    }

    #[test]
    fn rescan_replaces_results() {
        let mut session = ScanSession::new();
        session.run(&Fake::Pick(vec![("a.txt", 1), ("b.txt", 2)]));
        session.rename(0, "c.txt").unwrap();
        assert_eq!(session.logs().len(), 1);

        session.run(&Fake::Pick(vec![("z.mp4", 9)]));
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].name, "z.mp4");
        assert!(session.logs().is_empty());
    }

    #[test]
    fn rename_logs_only_real_changes() {
        let mut session = ScanSession::new();
        session.run(&Fake::Pick(vec![("a.txt", 1)]));

        assert_eq!(session.rename(0, "a.txt"), Ok(false));
        assert!(session.logs().is_empty());

        assert_eq!(session.rename(0, "a.png"), Ok(true));
        assert_eq!(session.records()[0].category, Category::Image);
        assert_eq!(session.logs().len(), 1);
        assert_eq!(session.logs()[0].kind, LogEntry::INFO);
        assert_eq!(session.logs()[0].path.as_deref(), Some("a.png"));

        assert!(session.rename(5, "x").is_err());
    }

    #[test]
    fn derived_views_follow_records() {
        let mut session = ScanSession::new();
        session.run(&Fake::Pick(vec![("a.txt", 10), ("b.zip", 30)]));

        let summary = session.summary();
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_size_bytes, 40);
        assert_eq!(summary.top_largest[0].name, "b.zip");

        let tree = session.tree();
        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.total_size, 40);

        let report = session.report(Utc::now());
        assert_eq!(report.summary.total_files, 2);
    }
}
