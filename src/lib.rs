//! Drag-and-drop file intake zone for a media import screen.
/// Application directory resolution.
pub mod app_dirs;
/// TOML configuration for the drop zone.
pub mod config;
/// Open-file dialog requests and responses.
pub mod dialog;
/// egui widget, state and host screen.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
