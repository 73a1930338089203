/// Top-level UI panels.

pub mod log_panel;
pub mod summary_panel;
pub mod tree_panel;
