/// UI widgets for FolderSleuth.

pub mod rename_dialog;
pub mod size_bar;
pub mod status_bar;
pub mod toolbar;
pub mod tree_view;
