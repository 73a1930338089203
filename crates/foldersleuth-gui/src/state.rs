/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Scan results
/// live in a [`ScanSession`]; the tree and summary shown on screen are
/// derived from it and rebuilt whenever the record list changes. The scan
/// thread communicates via a channel drained by `process_scan_messages()`
/// once per frame.
use crossbeam_channel::TryRecvError;
use foldersleuth_core::analysis::categorizer::extension_changed;
use foldersleuth_core::analysis::Summary;
use foldersleuth_core::error::ReportError;
use foldersleuth_core::model::{FileTree, NodeIndex};
use foldersleuth_core::report::write_csv;
use foldersleuth_core::scanner::{DirectoryHandle, FolderPicker, ScanHandle};
use foldersleuth_core::scanner::progress::ScanProgress;
use foldersleuth_core::session::ScanSession;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// No scan has run yet.
    Idle,
    /// Scanning: spinner and live counters.
    Scanning,
    /// Scan complete; results are available.
    Results,
}

/// A row in the flattened visible-rows list for the virtualised TreeView.
#[derive(Clone, Debug)]
pub struct VisibleRow {
    /// Index into the `FileTree` arena.
    pub node_index: NodeIndex,
    /// Nesting depth (0 = top-level entry of the scanned folder).
    pub depth: u16,
    /// Whether this directory is currently expanded (meaningless for files).
    pub is_expanded: bool,
}

/// An open rename dialog for one file record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameDialog {
    /// Index into the session's record list.
    pub record: usize,
    /// Name when the dialog was opened.
    pub original: String,
    /// Text currently in the edit field.
    pub new_name: String,
    /// The user submitted a name with a different extension and must
    /// confirm before it is applied.
    pub awaiting_confirmation: bool,
    /// Last rejection, shown under the edit field.
    pub error: Option<String>,
}

/// Maximum number of scan-progress messages drained from the channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking the
/// render thread for a perceptible duration when it is eventually shown again.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum rows in the virtualised tree-view visible-rows list.
pub const MAX_VISIBLE_ROWS: usize = 500_000;

/// All application state.
pub struct AppState {
    // ── Session ────────────────────────────────────────
    pub session: ScanSession,

    // ── Scan ───────────────────────────────────────────
    pub phase: AppPhase,
    pub scan_handle: Option<ScanHandle>,
    pub scan_files_found: u64,
    pub scan_total_size: u64,
    pub scan_current_path: String,
    pub scan_duration: Option<Duration>,

    // ── Derived views ──────────────────────────────────
    /// Display tree folded from the session's records.
    pub tree: Option<FileTree>,
    pub summary: Option<Summary>,
    pub visible_rows: Vec<VisibleRow>,
    pub selected_node: Option<NodeIndex>,

    // ── UI state ───────────────────────────────────────
    pub rename: Option<RenameDialog>,
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: ScanSession::new(),
            phase: AppPhase::Idle,
            scan_handle: None,
            scan_files_found: 0,
            scan_total_size: 0,
            scan_current_path: String::new(),
            scan_duration: None,
            tree: None,
            summary: None,
            visible_rows: Vec::new(),
            selected_node: None,
            rename: None,
            show_about: false,
            dark_mode: true,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == AppPhase::Scanning
    }

    /// Ask `picker` for a folder and start scanning it.
    ///
    /// Cancelling the pick does nothing at all. Any other pick failure is
    /// recorded as one `System` log entry and the previous results stay.
    pub fn select_and_scan<P>(&mut self, picker: &P)
    where
        P: FolderPicker,
        P::Handle: Send + 'static,
    {
        if self.is_scanning() {
            return;
        }
        if let Some((name, root)) = self.session.pick(picker) {
            self.start_scan(name, root);
        }
    }

    /// Start a background scan of `root`, discarding the previous results.
    ///
    /// Ignored while another scan is still running.
    pub fn start_scan<H>(&mut self, root_name: String, root: H)
    where
        H: DirectoryHandle + Send + 'static,
    {
        if self.is_scanning() {
            warn!("Scan of {root_name} requested while another scan is running");
            return;
        }

        self.phase = AppPhase::Scanning;
        self.scan_files_found = 0;
        self.scan_total_size = 0;
        self.scan_current_path = root_name.clone();
        self.scan_duration = None;
        self.tree = None;
        self.summary = None;
        self.visible_rows.clear();
        self.selected_node = None;
        self.rename = None;

        self.session.begin_scan(root_name.clone());
        self.scan_handle = Some(foldersleuth_core::scanner::start_scan(root_name, root));
    }

    /// Process pending scan progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_scan_messages(&mut self) -> bool {
        let handle = match &self.scan_handle {
            Some(h) => h,
            None => return false,
        };

        let mut repaint = false;
        let mut messages_this_frame = 0usize;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // The scanner thread died without sending Complete.
                    self.session
                        .log_system("Scan ended unexpectedly; results may be incomplete");
                    self.phase = AppPhase::Results;
                    self.scan_handle = None;
                    self.refresh_views();
                    return true;
                }
            };
            messages_this_frame += 1;
            repaint = true;
            match msg {
                ScanProgress::Log(entry) => self.session.push_log(entry),
                ScanProgress::Update {
                    files_found,
                    total_size,
                    current_path,
                } => {
                    self.scan_files_found = files_found;
                    self.scan_total_size = total_size;
                    self.scan_current_path = current_path;
                }
                ScanProgress::Complete { records, duration } => {
                    self.scan_files_found = records.len() as u64;
                    self.scan_total_size = records.iter().map(|r| r.size_bytes).sum();
                    self.scan_duration = Some(duration);
                    self.session.finish_scan(records);
                    self.phase = AppPhase::Results;
                    self.scan_handle = None;
                    self.refresh_views();
                    return true;
                }
            }
        }

        repaint
    }

    /// Rebuild the tree and summary from the session's records.
    ///
    /// Expanded directories stay expanded when they still exist.
    fn refresh_views(&mut self) {
        let expanded: HashSet<String> = match &self.tree {
            Some(tree) => self
                .visible_rows
                .iter()
                .filter(|r| r.is_expanded)
                .map(|r| tree.full_path(r.node_index))
                .collect(),
            None => HashSet::new(),
        };
        let selected = match (&self.tree, self.selected_node) {
            (Some(tree), Some(node)) => Some(tree.full_path(node)),
            _ => None,
        };

        let tree = self.session.tree();
        self.visible_rows.clear();
        for &root in &tree.roots {
            build_rows_recursive(&mut self.visible_rows, &tree, root, 0, &expanded);
        }
        self.selected_node = selected.and_then(|path| {
            self.visible_rows
                .iter()
                .map(|r| r.node_index)
                .find(|&n| tree.full_path(n) == path)
        });
        self.summary = Some(self.session.summary());
        self.tree = Some(tree);
    }

    /// Toggle expansion of the directory at `row_index` in `visible_rows`.
    pub fn toggle_expand(&mut self, row_index: usize) {
        if let Some(ref tree) = self.tree {
            toggle_expand_inner(&mut self.visible_rows, row_index, tree);
        }
    }

    /// Open the rename dialog for a file node. Directories are ignored.
    pub fn begin_rename(&mut self, node: NodeIndex) {
        let Some(record) = self
            .tree
            .as_ref()
            .and_then(|t| t.nodes.get(node.idx()))
            .and_then(|n| n.record)
        else {
            return;
        };
        let Some(name) = self.session.records().get(record).map(|r| r.name.clone()) else {
            return;
        };
        self.rename = Some(RenameDialog {
            record,
            original: name.clone(),
            new_name: name,
            awaiting_confirmation: false,
            error: None,
        });
    }

    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    /// Submit the name in the rename dialog.
    ///
    /// A changed extension moves the dialog into its confirmation step
    /// instead of applying the rename.
    pub fn submit_rename(&mut self) {
        let Some(dialog) = self.rename.as_mut() else {
            return;
        };
        let new_name = dialog.new_name.trim();
        if !dialog.awaiting_confirmation && extension_changed(&dialog.original, new_name) {
            dialog.awaiting_confirmation = true;
            return;
        }
        self.apply_rename();
    }

    /// Answer "no" to the extension-change question: back to editing.
    pub fn reject_extension_change(&mut self) {
        if let Some(dialog) = self.rename.as_mut() {
            dialog.awaiting_confirmation = false;
        }
    }

    fn apply_rename(&mut self) {
        let Some(dialog) = self.rename.take() else {
            return;
        };
        match self.session.rename(dialog.record, dialog.new_name.trim()) {
            Ok(true) => self.refresh_views(),
            Ok(false) => {}
            Err(e) => {
                self.rename = Some(RenameDialog {
                    awaiting_confirmation: false,
                    error: Some(e.to_string()),
                    ..dialog
                });
            }
        }
    }

    /// Write the JSON report to `path`. Failures are logged as `System`.
    pub fn save_json_report(&mut self, path: &Path) -> bool {
        let result = self.session.report(chrono::Utc::now()).write_json(path);
        self.record_export_result("JSON report", result)
    }

    /// Write the CSV export to `path`. Failures are logged as `System`.
    pub fn save_csv_export(&mut self, path: &Path) -> bool {
        let result = write_csv(self.session.records(), path);
        self.record_export_result("CSV export", result)
    }

    fn record_export_result(&mut self, what: &str, result: Result<(), ReportError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                self.session.log_system(format!("{what} failed: {e}"));
                false
            }
        }
    }
}

/// Append rows for `node_idx` and its expanded descendants.
///
/// Stops inserting once [`MAX_VISIBLE_ROWS`] is reached.
fn build_rows_recursive(
    rows: &mut Vec<VisibleRow>,
    tree: &FileTree,
    node_idx: NodeIndex,
    depth: u16,
    expanded: &HashSet<String>,
) {
    if rows.len() >= MAX_VISIBLE_ROWS {
        return;
    }

    let is_expanded = tree.node(node_idx).is_dir && expanded.contains(&tree.full_path(node_idx));
    rows.push(VisibleRow {
        node_index: node_idx,
        depth,
        is_expanded,
    });

    if is_expanded {
        for child_idx in tree.children(node_idx) {
            build_rows_recursive(rows, tree, child_idx, depth + 1, expanded);
        }
    }
}

/// Toggle-expand implementation operating on the visible_rows vec directly.
///
/// Free function to avoid `&mut self` / `&self.tree` borrow conflict.
fn toggle_expand_inner(visible_rows: &mut Vec<VisibleRow>, row_index: usize, tree: &FileTree) {
    let Some(row) = visible_rows.get(row_index) else {
        return;
    };
    if !tree.node(row.node_index).is_dir {
        return;
    }

    if row.is_expanded {
        // Collapse: drop the consecutive run of deeper rows that follows.
        let parent_depth = row.depth;
        let remove_start = row_index + 1;
        let mut remove_end = remove_start;
        while remove_end < visible_rows.len() && visible_rows[remove_end].depth > parent_depth {
            remove_end += 1;
        }
        visible_rows.drain(remove_start..remove_end);
        visible_rows[row_index].is_expanded = false;
    } else {
        // Expand: splice the children in scan order right after this row.
        let child_depth = row.depth + 1;
        let headroom = MAX_VISIBLE_ROWS.saturating_sub(visible_rows.len());
        let new_rows: Vec<VisibleRow> = tree
            .children(row.node_index)
            .into_iter()
            .take(headroom)
            .map(|child_idx| VisibleRow {
                node_index: child_idx,
                depth: child_depth,
                is_expanded: false,
            })
            .collect();

        let insert_pos = row_index + 1;
        visible_rows.splice(insert_pos..insert_pos, new_rows);
        visible_rows[row_index].is_expanded = true;
    }
}
