/// Data model: scanned file records, log entries, and the display tree.
pub mod file_node;
pub mod file_record;
pub mod file_tree;
pub mod log_entry;
pub mod rename;
pub mod size;

pub use file_node::{FileNode, NodeIndex};
pub use file_record::FileRecord;
pub use file_tree::FileTree;
pub use log_entry::LogEntry;
