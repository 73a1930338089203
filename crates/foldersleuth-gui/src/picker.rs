/// Native dialogs: folder selection for scans and save locations for exports.
use foldersleuth_core::error::ScanError;
use foldersleuth_core::scanner::{FolderPicker, FsHandle, PickOutcome};
use std::path::PathBuf;

/// The production [`FolderPicker`], backed by the OS folder dialog.
pub struct NativeFolderPicker;

impl FolderPicker for NativeFolderPicker {
    type Handle = FsHandle;

    fn pick(&self) -> Result<PickOutcome<FsHandle>, ScanError> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Select a folder to scan")
            .pick_folder()
        else {
            return Ok(PickOutcome::Cancelled);
        };
        let root = FsHandle::open(path)?;
        Ok(PickOutcome::Picked {
            name: root.display_name(),
            root,
        })
    }
}

/// Ask where to save the JSON report, suggesting `default_name`.
pub fn save_json_path(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name(default_name)
        .save_file()
}

/// Ask where to save the CSV export, suggesting `default_name`.
pub fn save_csv_path(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(default_name)
        .save_file()
}
