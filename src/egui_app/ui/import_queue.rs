use std::path::PathBuf;

use eframe::egui::{self, DroppedFile, RichText, Ui};

use super::style::{self, StatusTone};
use crate::dialog::FileInfo;
use crate::egui_app::controller::DropZoneHandler;

/// How a file reached the import screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportOrigin {
    Dropped,
    Dialog,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportEntry {
    pub label: String,
    pub path: Option<PathBuf>,
    pub origin: ImportOrigin,
}

/// Files handed over by the drop zone, waiting to be imported.
#[derive(Debug)]
pub struct ImportQueue {
    entries: Vec<ImportEntry>,
    status: String,
    tone: StatusTone,
}

impl Default for ImportQueue {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            status: "Waiting for files".into(),
            tone: StatusTone::Idle,
        }
    }
}

impl ImportQueue {
    pub fn entries(&self) -> &[ImportEntry] {
        &self.entries
    }

    pub fn status(&self) -> (&str, StatusTone) {
        (&self.status, self.tone)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.set_status("Queue cleared", StatusTone::Idle);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = text.into();
        self.tone = tone;
    }

    fn push_batch(&mut self, batch: Vec<ImportEntry>, origin: &str) {
        let count = batch.len();
        self.entries.extend(batch);
        let noun = if count == 1 { "file" } else { "files" };
        self.set_status(format!("Queued {count} {noun} from {origin}"), StatusTone::Info);
    }

    pub(super) fn render_list(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Import queue").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.entries.is_empty(), egui::Button::new("Clear"))
                    .clicked()
                {
                    self.clear();
                }
            });
        });
        ui.separator();
        if self.entries.is_empty() {
            ui.label(RichText::new("Nothing queued yet").color(palette.text_muted));
            return;
        }
        egui::ScrollArea::vertical()
            .id_salt("import_queue_scroll")
            .show(ui, |ui| {
                for (index, entry) in self.entries.iter().enumerate() {
                    let marker = match entry.origin {
                        ImportOrigin::Dropped => "⬇",
                        ImportOrigin::Dialog => "📂",
                    };
                    ui.push_id(index, |ui| {
                        let response = ui.label(format!("{marker} {}", entry.label));
                        if let Some(path) = &entry.path {
                            response.on_hover_text(path.display().to_string());
                        }
                    });
                }
            });
    }

    pub(super) fn render_status(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 5.0, style::status_badge_color(self.tone));
            ui.label(&self.status);
        });
    }
}

impl DropZoneHandler for ImportQueue {
    fn on_drop_files(&mut self, files: Vec<DroppedFile>) {
        let batch: Vec<ImportEntry> = files.into_iter().map(dropped_entry).collect();
        if batch.is_empty() {
            self.set_status("Drop contained no files", StatusTone::Warning);
            return;
        }
        for entry in &batch {
            tracing::info!(file = %entry.label, "Queued dropped file");
        }
        self.push_batch(batch, "drop");
    }

    fn on_open_files(&mut self, files: Vec<FileInfo>) {
        let batch: Vec<ImportEntry> = files
            .into_iter()
            .map(|info| ImportEntry {
                label: info.name,
                path: Some(info.path),
                origin: ImportOrigin::Dialog,
            })
            .collect();
        for entry in &batch {
            tracing::info!(file = %entry.label, "Queued file from dialog");
        }
        self.push_batch(batch, "dialog");
    }
}

fn dropped_entry(file: DroppedFile) -> ImportEntry {
    let label = match (&file.path, file.name.is_empty()) {
        (Some(path), _) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        (None, false) => file.name.clone(),
        (None, true) => "(unnamed file)".to_string(),
    };
    ImportEntry {
        label,
        path: file.path,
        origin: ImportOrigin::Dropped,
    }
}
