/// Top action bar: folder selection, exports, theme toggle, and branding.
use crate::picker::{save_csv_path, save_json_path, NativeFolderPicker};
use crate::state::AppState;
use foldersleuth_core::report::{default_csv_file_name, default_file_name};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title in the accent colour so it adapts to dark and light mode.
        ui.label(
            egui::RichText::new("📂 FolderSleuth")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // One scan at a time.
        let can_scan = !state.is_scanning();
        let scan_btn = ui
            .add_enabled(
                can_scan,
                egui::Button::new("📁 Select Folder").min_size(egui::vec2(110.0, 28.0)),
            )
            .on_disabled_hover_text("A scan is already running");
        if scan_btn.clicked() {
            state.select_and_scan(&NativeFolderPicker);
        }

        ui.separator();

        let can_export = state.session.has_results() && !state.is_scanning();
        let hint = "Run a scan first to enable export";

        if ui
            .add_enabled(can_export, egui::Button::new("💾 Download JSON"))
            .on_hover_text("Save the scan report as JSON")
            .on_disabled_hover_text(hint)
            .clicked()
        {
            if let Some(path) = save_json_path(&default_file_name(chrono::Utc::now())) {
                state.save_json_report(&path);
            }
        }

        if ui
            .add_enabled(can_export, egui::Button::new("📤 Export CSV"))
            .on_hover_text("Save the file list as CSV")
            .on_disabled_hover_text(hint)
            .clicked()
        {
            if let Some(path) = save_csv_path(&default_csv_file_name(chrono::Utc::now())) {
                state.save_csv_export(&path);
            }
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About FolderSleuth").clicked() {
                state.show_about = true;
            }

            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            if let Some(name) = state.session.root_name() {
                ui.separator();
                ui.label(
                    egui::RichText::new(name)
                        .size(12.0)
                        .color(ui.visuals().weak_text_color()),
                );
            }
        });
    });
}
