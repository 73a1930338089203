/// Folder selection: the step that yields a scan root.
///
/// Cancelling is an ordinary outcome, not an error, so callers can ignore it
/// without logging anything.
use super::handle::DirectoryHandle;
use crate::error::ScanError;

#[derive(Debug)]
pub enum PickOutcome<H> {
    /// The user chose a folder.
    Picked { name: String, root: H },
    /// The user dismissed the dialog.
    Cancelled,
}

pub trait FolderPicker {
    type Handle: DirectoryHandle;

    fn pick(&self) -> Result<PickOutcome<Self::Handle>, ScanError>;
}
