/// Virtualised TreeView widget.
///
/// Only renders rows visible in the viewport, giving O(1) rendering cost
/// regardless of tree size. Uses the flat `visible_rows` list maintained by
/// `AppState`.
use crate::state::{AppPhase, AppState};
use crate::theme::Palette;
use foldersleuth_core::model::size::{format_count, format_size};
use foldersleuth_core::model::{FileRecord, FileTree, NodeIndex};
use egui::{Rect, Response, Sense, Ui, Vec2};

/// Height of each row in pixels.
pub const ROW_HEIGHT: f32 = 24.0;

/// Indentation per depth level in pixels.
const INDENT_PX: f32 = 20.0;

/// Width reserved on the right for size, percentage, and bar.
const RIGHT_AREA_PX: f32 = 240.0;

/// Something the user did in the tree this frame, applied after rendering.
#[derive(Default)]
struct RowActions {
    toggle_row: Option<usize>,
    new_selection: Option<usize>,
    rename: Option<NodeIndex>,
}

/// Draw the virtualised tree view.
pub fn tree_view(ui: &mut Ui, state: &mut AppState) -> Response {
    let Some(tree) = state.tree.as_ref() else {
        let hint = if state.phase == AppPhase::Scanning {
            "Scanning... the tree appears when the scan completes."
        } else {
            "No scan results. Click Select Folder to start."
        };
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(hint).color(ui.visuals().weak_text_color()));
        });
        return ui.interact(ui.max_rect(), ui.id().with("empty_tree"), Sense::click());
    };

    if tree.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("The selected folder contains no readable files.")
                    .color(ui.visuals().weak_text_color()),
            );
        });
        return ui.interact(ui.max_rect(), ui.id().with("empty_tree"), Sense::click());
    }

    let actions = render_tree_rows(ui, state, tree);

    // Apply deferred state mutations now that the tree borrow has ended.
    if let Some(row_idx) = actions.new_selection {
        if let Some(row) = state.visible_rows.get(row_idx) {
            state.selected_node = Some(row.node_index);
        }
    }
    if let Some(row_idx) = actions.toggle_row {
        state.toggle_expand(row_idx);
    }
    if let Some(node) = actions.rename {
        state.begin_rename(node);
    }

    ui.interact(ui.max_rect(), ui.id().with("tree_bg"), Sense::hover())
}

fn render_tree_rows(ui: &mut Ui, state: &AppState, tree: &FileTree) -> RowActions {
    let palette = Palette::for_visuals(ui.visuals());
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_selection = ui.visuals().selection.bg_fill;
    let records = state.session.records();

    let total_rows = state.visible_rows.len();
    let total_height = total_rows as f32 * ROW_HEIGHT;
    let mut actions = RowActions::default();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Reserve the full virtual height so the scrollbar is correct.
            let (response, mut painter) = ui.allocate_painter(
                Vec2::new(ui.available_width(), total_height),
                Sense::click(),
            );

            let viewport = ui.clip_rect();
            let top_y = response.rect.top();

            let first_visible = ((viewport.top() - top_y) / ROW_HEIGHT).floor().max(0.0) as usize;
            let last_visible = ((viewport.bottom() - top_y) / ROW_HEIGHT)
                .ceil()
                .min(total_rows as f32) as usize;

            for row_idx in first_visible..last_visible {
                let Some(row) = state.visible_rows.get(row_idx) else {
                    break;
                };
                let node = tree.node(row.node_index);
                let record = node.record.and_then(|r| records.get(r));

                let row_rect = Rect::from_min_size(
                    egui::pos2(response.rect.left(), top_y + row_idx as f32 * ROW_HEIGHT),
                    Vec2::new(response.rect.width(), ROW_HEIGHT),
                );
                if !viewport.intersects(row_rect) {
                    continue;
                }

                let is_selected = state.selected_node == Some(row.node_index);
                if is_selected {
                    painter.rect_filled(row_rect, 0.0, color_selection);
                }

                let row_response = ui.interact(
                    row_rect,
                    ui.id().with(("tree_row", row_idx)),
                    Sense::click(),
                );
                if row_response.hovered() && !is_selected {
                    painter.rect_filled(row_rect, 0.0, palette.row_hover);
                }
                if row_response.clicked() {
                    actions.new_selection = Some(row_idx);
                }
                if row_response.double_clicked() && node.is_dir {
                    actions.toggle_row = Some(row_idx);
                }

                row_response.context_menu(|ui| {
                    if let Some(rename) = context_menu(ui, tree, row.node_index) {
                        actions.rename = Some(rename);
                    }
                });

                if row_response.hovered() {
                    let tip_text = tooltip_text(tree, row.node_index, record);
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        ui.id().with(("tree_tip", row_idx)),
                        |ui| {
                            ui.label(tip_text);
                        },
                    );
                }

                let indent = INDENT_PX * (row.depth as f32 + 1.0);
                let text_x = row_rect.left() + indent + 4.0;
                let text_y = row_rect.center().y;

                // Expand/collapse arrow for directories.
                if node.is_dir {
                    let arrow_text = if row.is_expanded { "▼" } else { "▶" };
                    let arrow_rect = Rect::from_min_size(
                        egui::pos2(row_rect.left() + indent - 14.0, row_rect.top()),
                        Vec2::new(16.0, ROW_HEIGHT),
                    );
                    let arrow_response =
                        ui.interact(arrow_rect, ui.id().with(("arrow", row_idx)), Sense::click());
                    if arrow_response.clicked() {
                        actions.toggle_row = Some(row_idx);
                    }
                    painter.text(
                        egui::pos2(row_rect.left() + indent - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        arrow_text,
                        egui::FontId::proportional(11.0),
                        color_weak,
                    );
                }

                let (icon, icon_color) = if node.is_dir {
                    ("📁", palette.folder_icon)
                } else {
                    ("📄", palette.file_icon)
                };
                painter.text(
                    egui::pos2(text_x, text_y),
                    egui::Align2::LEFT_CENTER,
                    icon,
                    egui::FontId::proportional(13.0),
                    icon_color,
                );

                // Name, then "(Category)" for files, clipped to the space
                // left of the size columns.
                let name_x = text_x + 20.0;
                let right_area_start = row_rect.right() - RIGHT_AREA_PX;
                let max_name_w = (right_area_start - name_x - 4.0).max(20.0);
                let label = match record {
                    Some(r) => format!("{} ({})", node.name, r.category),
                    None => node.name.to_string(),
                };
                let name_color = if record.is_some_and(|r| r.is_hidden) {
                    color_weak
                } else {
                    color_normal
                };
                let galley =
                    painter.layout_no_wrap(label, egui::FontId::proportional(13.0), name_color);

                if galley.size().x <= max_name_w {
                    painter.galley(
                        egui::pos2(name_x, text_y - galley.size().y / 2.0),
                        galley,
                        name_color,
                    );
                } else {
                    let clip = Rect::from_min_size(
                        egui::pos2(name_x, row_rect.top()),
                        Vec2::new(max_name_w - 12.0, ROW_HEIGHT),
                    );
                    let prev_clip = painter.clip_rect();
                    painter.set_clip_rect(prev_clip.intersect(clip));
                    painter.galley(
                        egui::pos2(name_x, text_y - galley.size().y / 2.0),
                        galley,
                        name_color,
                    );
                    painter.set_clip_rect(prev_clip);
                    painter.text(
                        egui::pos2(name_x + max_name_w - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        "…",
                        egui::FontId::proportional(13.0),
                        color_weak,
                    );
                }

                painter.text(
                    egui::pos2(right_area_start, text_y),
                    egui::Align2::LEFT_CENTER,
                    format_size(node.size),
                    egui::FontId::proportional(12.0),
                    color_weak,
                );
                painter.text(
                    egui::pos2(right_area_start + 80.0, text_y),
                    egui::Align2::LEFT_CENTER,
                    format!("{:.1}%", node.percent_of_parent),
                    egui::FontId::proportional(12.0),
                    color_weak,
                );

                // Size bar relative to the parent.
                let bar_width = 100.0;
                let bar_height = 10.0;
                let bar_rect = Rect::from_min_size(
                    egui::pos2(right_area_start + 130.0, text_y - bar_height / 2.0),
                    Vec2::new(bar_width, bar_height),
                );
                painter.rect_filled(bar_rect, 2.0, palette.bar_track);
                let fill_w = bar_width * (node.percent_of_parent / 100.0).clamp(0.0, 1.0);
                if fill_w > 0.5 {
                    let fill_rect =
                        Rect::from_min_size(bar_rect.min, Vec2::new(fill_w, bar_height));
                    painter.rect_filled(fill_rect, 2.0, palette.bar_color(node.percent_of_parent));
                }
            }

            response
        });

    actions
}

fn tooltip_text(tree: &FileTree, node_index: NodeIndex, record: Option<&FileRecord>) -> String {
    let node = tree.node(node_index);
    let path = tree.full_path(node_index);
    match record {
        Some(r) => format!(
            "{path}\n{} - {}\nModified {}",
            format_size(r.size_bytes),
            r.category,
            r.last_modified.format("%Y-%m-%d %H:%M"),
        ),
        None => format!(
            "{path}\n{} in {} files",
            format_size(node.size),
            format_count(node.descendant_count),
        ),
    }
}

/// Right-click menu for a tree node. Returns the node to rename, if chosen.
fn context_menu(ui: &mut Ui, tree: &FileTree, node_index: NodeIndex) -> Option<NodeIndex> {
    let node = tree.node(node_index);
    let mut rename = None;

    if node.record.is_some() && ui.button("✏ Rename…").clicked() {
        rename = Some(node_index);
        ui.close_menu();
    }

    if ui.button("📋 Copy Path").clicked() {
        ui.ctx().copy_text(tree.full_path(node_index));
        ui.close_menu();
    }

    ui.separator();
    ui.label(format!("Size: {}", format_size(node.size)));
    if node.is_dir {
        ui.label(format!("Files: {}", format_count(node.descendant_count)));
    }

    rename
}
