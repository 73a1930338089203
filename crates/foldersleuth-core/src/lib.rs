/// FolderSleuth Core: scanning, classification, and summary statistics.
///
/// This crate contains all business logic with zero UI dependencies.
///
/// # Modules
///
/// - [`analysis`]: extension classifier and summary statistics.
/// - [`model`]: file records, log entries, rename, and the display tree.
/// - [`scanner`]: directory-handle traversal with background progress reporting.
/// - [`report`]: JSON and CSV export of scan results.
/// - [`session`]: the controller that owns one session's records and log.
/// - [`error`]: typed errors for the operations that can fail outright.
pub mod analysis;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;
pub mod session;
