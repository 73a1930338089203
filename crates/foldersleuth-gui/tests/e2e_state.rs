/// End-to-end tests for `AppState`, the GUI application state machine.
///
/// These tests exercise the real state transitions without spinning up an
/// egui window: scans run on the real background scanner over a temp
/// directory, and folder selection goes through a fake picker.
use foldersleuth_core::error::ScanError;
use foldersleuth_core::model::{LogEntry, NodeIndex};
use foldersleuth_core::scanner::{FolderPicker, FsHandle, PickOutcome};
use foldersleuth_gui::state::{AppPhase, AppState};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// Build a small temp directory: two files at the top, one in `sub/`.
fn make_temp_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.txt"), 100);
    write_bytes(&tmp.path().join("b.js"), 200);
    let sub = tmp.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    write_bytes(&sub.join("c.png"), 300);
    tmp
}

/// Pump `process_scan_messages()` until the phase leaves `Scanning` or the
/// deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.phase == AppPhase::Scanning {
        assert!(
            std::time::Instant::now() < deadline,
            "scan did not complete within 30 seconds"
        );
        state.process_scan_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn scan_dir(state: &mut AppState, dir: &Path) {
    let root = FsHandle::open(dir).unwrap();
    state.start_scan(root.display_name(), root);
    pump_until_done(state);
}

fn scanned_state() -> (TempDir, AppState) {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    scan_dir(&mut state, tmp.path());
    (tmp, state)
}

/// Tree node for the file called `name`.
fn file_node(state: &AppState, name: &str) -> NodeIndex {
    let tree = state.tree.as_ref().expect("tree after scan");
    let idx = tree
        .nodes
        .iter()
        .position(|n| !n.is_dir && n.name.as_str() == name)
        .unwrap_or_else(|| panic!("no file node named {name}"));
    NodeIndex::new(idx)
}

fn record_names(state: &AppState) -> Vec<String> {
    let mut names: Vec<String> = state
        .session
        .records()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    names.sort();
    names
}

enum FakePicker {
    Cancel,
    Fail,
    Folder(std::path::PathBuf),
}

impl FolderPicker for FakePicker {
    type Handle = FsHandle;

    fn pick(&self) -> Result<PickOutcome<FsHandle>, ScanError> {
        match self {
            FakePicker::Cancel => Ok(PickOutcome::Cancelled),
            FakePicker::Fail => Err(ScanError::Picker("no display".into())),
            FakePicker::Folder(path) => {
                let root = FsHandle::open(path.clone())?;
                Ok(PickOutcome::Picked {
                    name: root.display_name(),
                    root,
                })
            }
        }
    }
}

// ── Initial state ─────────────────────────────────────────────────────────────

#[test]
fn new_state_is_idle_and_dark() {
    let state = AppState::new();
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.dark_mode);
    assert!(state.tree.is_none());
    assert!(state.summary.is_none());
    assert!(state.session.logs().is_empty());
}

// ── Folder selection ──────────────────────────────────────────────────────────

#[test]
fn cancelled_pick_does_nothing() {
    let mut state = AppState::new();
    state.select_and_scan(&FakePicker::Cancel);

    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.session.logs().is_empty());
}

#[test]
fn failed_pick_logs_one_system_entry() {
    let mut state = AppState::new();
    state.select_and_scan(&FakePicker::Fail);

    assert_eq!(state.phase, AppPhase::Idle);
    let logs = state.session.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, LogEntry::SYSTEM);
    assert!(logs[0].message.contains("no display"));
}

#[test]
fn picked_folder_is_scanned() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.select_and_scan(&FakePicker::Folder(tmp.path().to_path_buf()));
    assert_eq!(state.phase, AppPhase::Scanning);
    pump_until_done(&mut state);

    assert_eq!(record_names(&state), ["a.txt", "b.js", "c.png"]);
}

// ── Scan lifecycle ────────────────────────────────────────────────────────────

#[test]
fn start_scan_sets_scanning_phase() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    let root = FsHandle::open(tmp.path()).unwrap();
    state.start_scan(root.display_name(), root);

    assert_eq!(state.phase, AppPhase::Scanning);
    assert!(state.is_scanning());
    pump_until_done(&mut state);
}

#[test]
fn scan_completes_with_tree_and_summary() {
    let (_tmp, state) = scanned_state();

    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.scan_handle.is_none());
    assert!(state.scan_duration.is_some());

    let tree = state.tree.as_ref().expect("tree after scan");
    assert_eq!(tree.total_size, 600);

    let summary = state.summary.as_ref().expect("summary after scan");
    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.total_size_bytes, 600);
    assert_eq!(summary.top_largest[0].name, "c.png");

    // Three top-level rows: a.txt, b.js, and the collapsed `sub` folder.
    assert_eq!(state.visible_rows.len(), 3);
    assert_eq!(state.scan_files_found, 3);
    assert_eq!(state.scan_total_size, 600);
}

#[test]
fn empty_folder_gives_empty_results() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new();
    scan_dir(&mut state, tmp.path());

    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.session.records().is_empty());
    assert!(state.visible_rows.is_empty());
    assert_eq!(state.summary.as_ref().unwrap().total_files, 0);
}

#[test]
fn rescan_replaces_previous_results() {
    let (_tmp, mut state) = scanned_state();
    assert_eq!(state.session.records().len(), 3);

    let other = TempDir::new().unwrap();
    write_bytes(&other.path().join("only.zip"), 7);
    scan_dir(&mut state, other.path());

    assert_eq!(record_names(&state), ["only.zip"]);
    assert_eq!(state.summary.as_ref().unwrap().total_size_bytes, 7);
    assert!(state.session.logs().is_empty());
}

// ── Tree view ─────────────────────────────────────────────────────────────────

#[test]
fn toggle_expand_adds_and_removes_child_rows() {
    let (_tmp, mut state) = scanned_state();
    let tree = state.tree.as_ref().unwrap();
    let sub_row = state
        .visible_rows
        .iter()
        .position(|r| tree.node(r.node_index).is_dir)
        .expect("sub folder row");

    state.toggle_expand(sub_row);
    assert_eq!(state.visible_rows.len(), 4);
    assert!(state.visible_rows[sub_row].is_expanded);
    assert_eq!(state.visible_rows[sub_row + 1].depth, 1);

    state.toggle_expand(sub_row);
    assert_eq!(state.visible_rows.len(), 3);
    assert!(!state.visible_rows[sub_row].is_expanded);
}

#[test]
fn toggle_expand_on_a_file_is_ignored() {
    let (_tmp, mut state) = scanned_state();
    let tree = state.tree.as_ref().unwrap();
    let file_row = state
        .visible_rows
        .iter()
        .position(|r| !tree.node(r.node_index).is_dir)
        .unwrap();

    state.toggle_expand(file_row);
    assert_eq!(state.visible_rows.len(), 3);
}

// ── Rename ────────────────────────────────────────────────────────────────────

#[test]
fn rename_with_same_extension_applies_immediately() {
    let (_tmp, mut state) = scanned_state();
    state.begin_rename(file_node(&state, "a.txt"));
    let dialog = state.rename.as_mut().expect("dialog open");
    assert_eq!(dialog.original, "a.txt");
    dialog.new_name = "  notes.txt ".into();

    state.submit_rename();

    assert!(state.rename.is_none());
    assert_eq!(record_names(&state), ["b.js", "c.png", "notes.txt"]);
    let last = state.session.logs().last().expect("rename logged");
    assert_eq!(last.kind, LogEntry::INFO);
    // The tree is rebuilt from the renamed record.
    file_node(&state, "notes.txt");
}

#[test]
fn rename_with_new_extension_needs_confirmation() {
    let (_tmp, mut state) = scanned_state();
    state.begin_rename(file_node(&state, "a.txt"));
    state.rename.as_mut().unwrap().new_name = "a.md".into();

    state.submit_rename();
    assert!(state.rename.as_ref().unwrap().awaiting_confirmation);
    assert_eq!(record_names(&state), ["a.txt", "b.js", "c.png"]);

    state.submit_rename();
    assert!(state.rename.is_none());
    assert_eq!(record_names(&state), ["a.md", "b.js", "c.png"]);
}

#[test]
fn rejecting_extension_change_returns_to_editing() {
    let (_tmp, mut state) = scanned_state();
    state.begin_rename(file_node(&state, "b.js"));
    state.rename.as_mut().unwrap().new_name = "b.ts".into();

    state.submit_rename();
    state.reject_extension_change();

    let dialog = state.rename.as_ref().expect("still editing");
    assert!(!dialog.awaiting_confirmation);
    assert_eq!(dialog.new_name, "b.ts");
    assert_eq!(record_names(&state), ["a.txt", "b.js", "c.png"]);
}

#[test]
fn unchanged_name_closes_dialog_without_logging() {
    let (_tmp, mut state) = scanned_state();
    let logs_before = state.session.logs().len();
    state.begin_rename(file_node(&state, "c.png"));

    state.submit_rename();

    assert!(state.rename.is_none());
    assert_eq!(state.session.logs().len(), logs_before);
}

#[test]
fn surrounding_spaces_alone_do_not_rename() {
    let (_tmp, mut state) = scanned_state();
    let logs_before = state.session.logs().len();
    state.begin_rename(file_node(&state, "a.txt"));
    state.rename.as_mut().unwrap().new_name = " a.txt  ".into();

    state.submit_rename();

    assert!(state.rename.is_none());
    assert_eq!(record_names(&state), ["a.txt", "b.js", "c.png"]);
    assert_eq!(state.session.logs().len(), logs_before);
}

#[test]
fn invalid_name_keeps_dialog_open_with_error() {
    let (_tmp, mut state) = scanned_state();
    state.begin_rename(file_node(&state, "a.txt"));
    state.rename.as_mut().unwrap().new_name = "x/a.txt".into();

    state.submit_rename();

    let dialog = state.rename.as_ref().expect("dialog reopened");
    assert!(dialog.error.is_some());
    assert_eq!(record_names(&state), ["a.txt", "b.js", "c.png"]);
}

#[test]
fn cancel_rename_closes_dialog() {
    let (_tmp, mut state) = scanned_state();
    state.begin_rename(file_node(&state, "a.txt"));
    state.cancel_rename();
    assert!(state.rename.is_none());
}

// ── Export ────────────────────────────────────────────────────────────────────

#[test]
fn json_report_is_written() {
    let (_tmp, mut state) = scanned_state();
    let out = TempDir::new().unwrap();
    let path = out.path().join("report.json");

    assert!(state.save_json_report(&path));

    let json: String = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"totalFiles\": 3"));
    assert!(json.contains("\"totalSize\": 600"));
    assert!(json.contains("\"name\": \"c.png\""));
}

#[test]
fn csv_export_is_written() {
    let (_tmp, mut state) = scanned_state();
    let out = TempDir::new().unwrap();
    let path = out.path().join("files.csv");

    assert!(state.save_csv_export(&path));

    let csv = fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.starts_with("name,fullPath,sizeBytes,lastModified,extension,category,isHidden"));
}

#[test]
fn failed_export_is_logged_as_system() {
    let (_tmp, mut state) = scanned_state();
    let out = TempDir::new().unwrap();
    let path = out.path().join("missing").join("report.json");

    assert!(!state.save_json_report(&path));

    let last = state.session.logs().last().unwrap();
    assert_eq!(last.kind, LogEntry::SYSTEM);
    assert!(last.message.starts_with("JSON report failed"));
}
