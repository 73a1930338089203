/// System Logs panel: every problem and notice recorded during the session.
use crate::state::AppState;
use crate::theme::Palette;
use egui::Ui;

/// Draw the log panel (right side).
pub fn log_panel(ui: &mut Ui, state: &AppState) {
    let palette = Palette::for_visuals(ui.visuals());
    let color_normal = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();
    let logs = state.session.logs();

    ui.horizontal(|ui| {
        ui.heading("System Logs");
        ui.label(
            egui::RichText::new(format!("({})", logs.len()))
                .color(color_muted)
                .size(12.0),
        );
    });
    ui.add_space(4.0);

    if logs.is_empty() {
        ui.label(egui::RichText::new("No entries.").color(color_muted).size(12.0));
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show_rows(ui, row_height, logs.len(), |ui, range| {
            for entry in &logs[range] {
                let kind_color = if entry.is_error() {
                    palette.warning
                } else {
                    color_muted
                };
                let detail = match &entry.path {
                    Some(path) => format!("{path}: {}", entry.message),
                    None => entry.message.clone(),
                };
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("[{}]", entry.kind))
                            .monospace()
                            .size(11.0)
                            .color(kind_color),
                    );
                    ui.label(
                        egui::RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                            .size(11.0)
                            .color(color_muted),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&detail).size(12.0).color(color_normal),
                        )
                        .truncate(),
                    )
                    .on_hover_text(&detail);
                });
            }
        });
}
