//! FolderSleuth: scan a folder, categorise its files, and export reports.
//!
//! Thin binary entry point. All logic lives in the `foldersleuth-core`
//! and `foldersleuth-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("FolderSleuth starting");

    let icon = foldersleuth_gui::icon::generate_icon(64);
    let state = foldersleuth_gui::FolderSleuthState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FolderSleuth")
            .with_inner_size([1360.0, 820.0])
            .with_min_inner_size([900.0, 520.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "FolderSleuth",
        options,
        Box::new(|cc| {
            Ok(Box::new(foldersleuth_gui::FolderSleuthApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
