/// Analytics Summary panel: totals, category breakdown, largest files.
///
/// Reads the `Summary` cached on `AppState`, which is rebuilt only when the
/// record list changes.
use crate::state::{AppPhase, AppState};
use crate::theme::{category_color, Palette};
use crate::widgets::size_bar::size_bar;
use foldersleuth_core::analysis::categorizer::Category;
use foldersleuth_core::model::size::{format_count, format_size};
use egui::{Ui, Vec2};
use egui_extras::{Column, TableBuilder};

/// Draw the summary panel (central area).
pub fn summary_panel(ui: &mut Ui, state: &AppState) {
    let palette = Palette::for_visuals(ui.visuals());
    let color_normal = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();
    let color_accent = ui.visuals().hyperlink_color;

    ui.heading("Analytics Summary");
    ui.add_space(4.0);

    let Some(summary) = state.summary.as_ref() else {
        let hint = if state.phase == AppPhase::Scanning {
            "Available after the scan completes."
        } else {
            "Select a folder to see its breakdown."
        };
        ui.label(egui::RichText::new(hint).color(color_muted).size(12.0));
        return;
    };

    egui::Grid::new("summary_totals")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Total files").color(color_muted));
            ui.label(
                egui::RichText::new(format_count(summary.total_files as u64))
                    .strong()
                    .color(color_normal),
            );
            ui.end_row();

            ui.label(egui::RichText::new("Total size").color(color_muted));
            ui.label(
                egui::RichText::new(format_size(summary.total_size_bytes))
                    .strong()
                    .color(color_accent),
            );
            ui.end_row();

            ui.label(egui::RichText::new("Hidden files").color(color_muted));
            ui.label(
                egui::RichText::new(format_count(summary.hidden_count as u64)).color(color_normal),
            );
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.label(egui::RichText::new("By category").strong().color(color_normal));
    ui.add_space(4.0);

    for &category in Category::ALL.iter() {
        let count = summary.category_counts.get(&category).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let bytes = summary.category_sizes.get(&category).copied().unwrap_or(0);
        let pct = if summary.total_size_bytes > 0 {
            (bytes as f64 / summary.total_size_bytes as f64 * 100.0) as f32
        } else {
            0.0
        };
        let color = category_color(category);

        ui.horizontal(|ui| {
            let (dot_rect, _) = ui.allocate_exact_size(Vec2::new(10.0, 10.0), egui::Sense::hover());
            ui.painter_at(dot_rect)
                .circle_filled(dot_rect.center(), 4.0, color);

            ui.label(
                egui::RichText::new(category.label())
                    .color(color_normal)
                    .size(12.0),
            );
            ui.label(
                egui::RichText::new(format!("{} files", format_count(count as u64)))
                    .color(color_muted)
                    .size(11.0),
            );
            ui.label(
                egui::RichText::new(format_size(bytes))
                    .color(color_normal)
                    .size(12.0),
            );
            ui.label(
                egui::RichText::new(format!("({pct:.1}%)"))
                    .color(color_muted)
                    .size(11.0),
            );
        });

        let bar_width = (ui.available_width() - 16.0).max(0.0);
        size_bar(ui, pct, bar_width, 4.0, palette.bar_track, color);
        ui.add_space(2.0);
    }

    ui.add_space(12.0);
    ui.label(
        egui::RichText::new(format!("Largest {} files", summary.top_largest.len()))
            .strong()
            .color(color_normal),
    );
    ui.add_space(4.0);

    if summary.top_largest.is_empty() {
        ui.label(egui::RichText::new("No files found.").color(color_muted).size(12.0));
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::exact(28.0))
        .column(Column::remainder().clip(true))
        .column(Column::auto().at_least(70.0))
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.label(egui::RichText::new("#").color(color_muted).size(11.0));
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Name").color(color_muted).size(11.0));
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Size").color(color_muted).size(11.0));
            });
        })
        .body(|mut body| {
            for (rank, record) in summary.top_largest.iter().enumerate() {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{}.", rank + 1))
                                .color(color_muted)
                                .size(12.0),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{} ({})", record.name, record.category))
                                .color(color_normal)
                                .size(12.0),
                        )
                        .on_hover_text(&record.full_path);
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(format_size(record.size_bytes))
                                .color(color_accent)
                                .size(12.0),
                        );
                    });
                });
            }
        });
}
