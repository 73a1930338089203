/// Scanner module: recursive folder traversal.
///
/// - [`handle`]: the directory-handle abstraction the walk runs against.
/// - [`fs`]: the real filesystem implementation of that abstraction.
/// - [`picker`]: folder selection, the step that produces a scan root.
/// - [`walk`]: the sequential depth-first traversal itself.
/// - [`progress`]: messages streamed from a background scan.
///
/// [`start_scan`] runs [`walk::scan`] on a background thread so the UI stays
/// responsive; log entries and running totals arrive over a bounded channel
/// in the order they were produced.
pub mod fs;
pub mod handle;
pub mod picker;
pub mod progress;
pub mod walk;

pub use fs::FsHandle;
pub use handle::{DirectoryHandle, Entry, EntryKind, FileStat};
pub use picker::{FolderPicker, PickOutcome};
pub use progress::ScanProgress;
pub use walk::{scan, ScanSink};

use crate::model::{FileRecord, LogEntry};
use crossbeam_channel::{Receiver, Sender};
use std::thread;
use std::time::Instant;
use tracing::info;

/// Maximum number of progress messages that may queue up in the channel.
///
/// The UI drains this channel once per frame. If it falls behind (hidden
/// window, resizing) the scanner blocks on `send` rather than consuming
/// unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// A [`ScanProgress::Update`] is sent after every this many files.
pub const UPDATE_INTERVAL: u64 = 500;

/// Handle to a running or completed scan.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Display name of the folder being scanned.
    pub root_name: String,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

/// Forwards walk events over the progress channel.
///
/// Send errors mean the receiver was dropped (the UI started over or shut
/// down); the walk simply finishes with nobody listening.
struct ChannelSink {
    tx: Sender<ScanProgress>,
    files_found: u64,
    total_size: u64,
}

impl ScanSink for ChannelSink {
    fn log(&mut self, entry: LogEntry) {
        let _ = self.tx.send(ScanProgress::Log(entry));
    }

    fn file_found(&mut self, record: &FileRecord) {
        self.files_found += 1;
        self.total_size += record.size_bytes;
        if self.files_found.is_multiple_of(UPDATE_INTERVAL) {
            let _ = self.tx.send(ScanProgress::Update {
                files_found: self.files_found,
                total_size: self.total_size,
                current_path: record.full_path.clone(),
            });
        }
    }
}

/// Start a new scan of `root` on a background thread.
///
/// The final message on the channel is always [`ScanProgress::Complete`],
/// carrying the full record list.
pub fn start_scan<H>(root_name: String, root: H) -> ScanHandle
where
    H: DirectoryHandle + Send + 'static,
{
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);

    let name = root_name.clone();
    let thread = thread::Builder::new()
        .name("foldersleuth-scanner".into())
        .spawn(move || {
            info!("Starting scan of {name}");
            let start = Instant::now();

            let mut sink = ChannelSink {
                tx: progress_tx,
                files_found: 0,
                total_size: 0,
            };
            let records = scan(&root, &mut sink);

            let duration = start.elapsed();
            info!(
                "Scan of {name} finished: {} files, {} bytes in {duration:?}",
                records.len(),
                sink.total_size
            );
            let _ = sink
                .tx
                .send(ScanProgress::Complete { records, duration });
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        root_name,
        _thread: Some(thread),
    }
}
