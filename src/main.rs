//! Entry point for the media import screen.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use dropzone::config::{self, DropZoneConfig};
use dropzone::dialog::NativeDialogService;
use dropzone::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use dropzone::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = load_config();
    let viewport = egui::ViewportBuilder::default()
        .with_title("Import media")
        .with_inner_size(egui::vec2(960.0, 600.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Import media",
        native_options,
        Box::new(move |_cc| {
            let dialog = NativeDialogService::new(config.dialog_extensions.clone());
            Ok(Box::new(EguiApp::new(&config, Box::new(dialog))))
        }),
    )?;
    Ok(())
}

fn load_config() -> DropZoneConfig {
    match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default drop zone settings: {err}");
            DropZoneConfig::default()
        }
    }
}
