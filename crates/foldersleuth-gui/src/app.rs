/// Main `eframe::App` implementation for FolderSleuth.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::widgets;

/// Pre-built application state.
///
/// Construct this before calling `eframe::run_native` so that the first
/// rendered frame already has everything it needs.
pub struct FolderSleuthState {
    pub(crate) inner: AppState,
}

impl FolderSleuthState {
    /// Build the initial (idle) state.
    pub fn build() -> Self {
        Self {
            inner: AppState::new(),
        }
    }
}

/// The FolderSleuth application.
pub struct FolderSleuthApp {
    state: AppState,
}

impl FolderSleuthApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: FolderSleuthState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state: state.inner }
    }
}

impl eframe::App for FolderSleuthApp {
    /// Match the GPU clear colour to the active theme background.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Process background messages ───────────────────────────────────
        self.state.process_scan_messages();

        if self.state.phase == AppPhase::Scanning {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About FolderSleuth")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("📂 FolderSleuth")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Scan a folder, browse its files by category,\n\
                             rename files, and export the results\n\
                             as a JSON report or CSV file.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Left sidebar: file tree ───────────────────────────────────────
        egui::SidePanel::left("tree_panel")
            .default_width(520.0)
            .min_width(320.0)
            .max_width(900.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::tree_panel::tree_panel(ui, &mut self.state);
            });

        // ── Right sidebar: system logs ────────────────────────────────────
        egui::SidePanel::right("log_panel")
            .default_width(300.0)
            .min_width(200.0)
            .max_width(600.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::log_panel::log_panel(ui, &self.state);
            });

        // ── Central panel: analytics ──────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                panels::summary_panel::summary_panel(ui, &self.state);
            });
        });

        // ── Rename dialog ─────────────────────────────────────────────────
        widgets::rename_dialog::rename_dialog(ctx, &mut self.state);
    }
}
