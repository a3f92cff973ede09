//! egui renderer for the media import screen.

mod drag_events;
pub mod drop_zone;
pub mod import_queue;
pub mod style;

use eframe::egui::{self, RichText};

use crate::config::DropZoneConfig;
use crate::dialog::DialogService;
use drop_zone::DropZone;
use import_queue::ImportQueue;

/// Minimum window size that keeps the zone and the queue readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(640.0, 420.0);

/// Import screen hosting the drop zone and the queue it feeds.
pub struct EguiApp {
    drop_zone: DropZone,
    queue: ImportQueue,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(config: &DropZoneConfig, dialog: Box<dyn DialogService>) -> Self {
        Self::with_drop_zone(DropZone::new(config, dialog))
    }

    pub fn with_drop_zone(drop_zone: DropZone) -> Self {
        Self {
            drop_zone,
            queue: ImportQueue::default(),
            visuals_set: false,
        }
    }

    pub fn queue(&self) -> &ImportQueue {
        &self.queue
    }

    pub fn drop_zone(&self) -> &DropZone {
        &self.drop_zone
    }

    pub fn drop_zone_mut(&mut self) -> &mut DropZone {
        &mut self.drop_zone
    }

    /// Draw one frame.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.apply_visuals(ctx);
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.queue.render_status(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                    ui.label(RichText::new(APP_VERSION).color(style::palette().text_muted));
                });
            });
        });
        egui::SidePanel::right("import_queue")
            .resizable(true)
            .default_width(240.0)
            .min_width(180.0)
            .show(ctx, |ui| self.queue.render_list(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            self.drop_zone.show(ui, &mut self.queue);
        });
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
