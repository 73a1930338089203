/// FolderSleuth GUI: egui-based desktop frontend.
///
/// This crate contains all UI code. Scanning, analysis, and export live in
/// `foldersleuth-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod picker;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{FolderSleuthApp, FolderSleuthState};
