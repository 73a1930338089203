/// File Tree panel: column headers above the virtualised tree view.
use crate::state::AppState;
use crate::theme::Palette;
use crate::widgets;
use egui::Ui;

/// Draw the tree panel (left side).
pub fn tree_panel(ui: &mut Ui, state: &mut AppState) {
    let palette = Palette::for_visuals(ui.visuals());
    let muted = ui.visuals().weak_text_color();

    ui.horizontal(|ui| {
        ui.heading("File Tree");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let Some(tree) = state.tree.as_ref() else {
                return;
            };
            if ui
                .add_enabled(!tree.is_empty(), egui::Button::new("📋 Copy as Text"))
                .on_hover_text("Copy the whole tree as an indented outline")
                .clicked()
            {
                ui.ctx().copy_text(tree.to_text(state.session.records()));
            }
        });
    });
    ui.add_space(4.0);

    // Column headers, aligned with the row layout in `tree_view`.
    let header_height = 20.0;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), header_height),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.header_bg);

    let right_start = rect.right() - 240.0;
    for (x, label) in [
        (rect.left() + 8.0, "Name"),
        (right_start, "Size"),
        (right_start + 80.0, "%"),
        (right_start + 130.0, "Share of folder"),
    ] {
        painter.text(
            egui::pos2(x, rect.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(12.0),
            muted,
        );
    }

    ui.separator();

    widgets::tree_view::tree_view(ui, state);
}
