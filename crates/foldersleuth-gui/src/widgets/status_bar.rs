/// Bottom status bar: scan progress and totals.
use crate::state::{AppPhase, AppState};
use crate::theme::Palette;
use foldersleuth_core::model::size::{format_count, format_size};
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let palette = Palette::for_visuals(ui.visuals());
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    let problems = state
        .session
        .logs()
        .iter()
        .filter(|e| e.is_error())
        .count() as u64;

    ui.horizontal(|ui| match state.phase {
        AppPhase::Idle => {
            ui.label(
                egui::RichText::new("Ready. Select a folder to scan.")
                    .size(12.0)
                    .color(color_weak),
            );
        }
        AppPhase::Scanning => {
            ui.spinner();

            let display_path = truncate_path(&state.scan_current_path, 60);
            ui.label(
                egui::RichText::new(format!("Scanning {display_path}..."))
                    .size(12.0)
                    .color(color_normal),
            );

            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} files", format_count(state.scan_files_found)))
                    .size(12.0)
                    .color(color_normal),
            );

            ui.separator();
            ui.label(
                egui::RichText::new(format_size(state.scan_total_size))
                    .size(12.0)
                    .color(color_accent),
            );

            if problems > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} errors", format_count(problems)))
                        .size(12.0)
                        .color(palette.warning),
                );
            }
        }
        AppPhase::Results => {
            ui.label(
                egui::RichText::new("\u{2713} Scan complete")
                    .size(12.0)
                    .color(palette.success),
            );

            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} files",
                    format_count(state.session.records().len() as u64)
                ))
                .size(12.0)
                .color(color_normal),
            );

            ui.separator();
            let total = state.tree.as_ref().map_or(0, |t| t.total_size);
            ui.label(
                egui::RichText::new(format_size(total))
                    .size(12.0)
                    .color(color_accent),
            );

            if let Some(duration) = state.scan_duration {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                        .size(12.0)
                        .color(color_weak),
                );
            }

            if problems > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} problems logged", format_count(problems)))
                        .size(12.0)
                        .color(palette.warning),
                );
            }
        }
    });
}

/// Truncate a path string to at most `max_len` characters, replacing the
/// middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    let len = path.chars().count();
    if len <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(len - half).collect();
    format!("{head}...{tail}")
}
