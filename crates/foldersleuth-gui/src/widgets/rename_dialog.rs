/// Modal rename dialog for a single file.
///
/// Editing happens in `AppState::rename`; this widget only draws it and
/// forwards button presses. A changed extension swaps the edit field for a
/// Yes/No question until the user answers.
use crate::state::AppState;
use crate::theme::Palette;
use foldersleuth_core::analysis::categorizer::dotted_extension;

/// Shown under the edit field; `AppState::submit_rename` trims the name.
pub const TRIM_NOTE: &str =
    "Spaces at the start and end are removed, so a name that only differs by them is left unchanged.";

enum DialogAction {
    Submit,
    Reject,
    Cancel,
}

/// Draw the rename dialog if one is open.
pub fn rename_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.rename.as_mut() else {
        return;
    };

    let palette = Palette::for_visuals(&ctx.style().visuals);
    let mut action = None;
    let mut open = true;

    egui::Window::new("Rename File")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([360.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("Current name: {}", dialog.original))
                    .size(12.0)
                    .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(6.0);

            if dialog.awaiting_confirmation {
                let from = display_extension(&dialog.original);
                let to = display_extension(dialog.new_name.trim());
                ui.label(
                    egui::RichText::new(format!(
                        "Change extension from {from} to {to}? The file may open differently."
                    ))
                    .color(palette.warning),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes, change it").clicked() {
                        action = Some(DialogAction::Submit);
                    }
                    if ui.button("No").clicked() {
                        action = Some(DialogAction::Reject);
                    }
                });
                return;
            }

            let edit = ui.add(
                egui::TextEdit::singleline(&mut dialog.new_name)
                    .desired_width(f32::INFINITY)
                    .hint_text("New file name"),
            );
            ui.label(
                egui::RichText::new(TRIM_NOTE)
                    .size(11.0)
                    .color(ui.visuals().weak_text_color()),
            );
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(DialogAction::Submit);
            }

            if let Some(error) = &dialog.error {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(error).size(12.0).color(palette.warning));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Rename").clicked() {
                    action = Some(DialogAction::Submit);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(DialogAction::Cancel);
                }
            });
        });

    if !open {
        action = Some(DialogAction::Cancel);
    }

    match action {
        Some(DialogAction::Submit) => state.submit_rename(),
        Some(DialogAction::Reject) => state.reject_extension_change(),
        Some(DialogAction::Cancel) => state.cancel_rename(),
        None => {}
    }
}

fn display_extension(name: &str) -> &str {
    match dotted_extension(name) {
        "" => "(none)",
        ext => ext,
    }
}
