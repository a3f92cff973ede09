//! The drop zone widget: a framed target with a prompt and an open button.

use std::time::Duration;

use eframe::egui::{self, Align2, Button, CursorIcon, FontId, Id, Rect, RichText, Sense, Ui, Vec2};

use super::drag_events::{DragEventAdapter, DropTarget, FrameDragInput};
use super::style;
use crate::config::DropZoneConfig;
use crate::dialog::DialogService;
use crate::egui_app::controller::{DropZoneController, DropZoneHandler};

const MIN_ZONE_SIZE: Vec2 = Vec2::new(320.0, 200.0);
const OPEN_BUTTON_SIZE: Vec2 = Vec2::new(150.0, 40.0);
const PROMPT_FONT_SIZE: f32 = 26.0;
const DIALOG_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drop zone widget wrapping a [`DropZoneController`].
pub struct DropZone {
    controller: DropZoneController,
    adapter: DragEventAdapter,
}

impl DropZone {
    pub fn new(config: &DropZoneConfig, dialog: Box<dyn DialogService>) -> Self {
        Self::from_controller(DropZoneController::new(config, dialog))
    }

    pub fn from_controller(controller: DropZoneController) -> Self {
        Self {
            controller,
            adapter: DragEventAdapter::default(),
        }
    }

    pub fn controller(&self) -> &DropZoneController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DropZoneController {
        &mut self.controller
    }

    /// Fill the available space with the zone and process this frame's drag
    /// input and dialog responses.
    pub fn show<H: DropZoneHandler + ?Sized>(&mut self, ui: &mut Ui, handler: &mut H) -> egui::Response {
        self.controller.poll_dialog_responses(handler);

        let size = ui.available_size().max(MIN_ZONE_SIZE);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let zone_id = response.id;
        let button_id = zone_id.with("open_button");
        let button_rect =
            Rect::from_center_size(rect.center() + egui::vec2(0.0, 44.0), OPEN_BUTTON_SIZE);

        self.dispatch_drag_input(
            ui.ctx(),
            &[
                DropTarget { id: zone_id, rect },
                DropTarget {
                    id: button_id,
                    rect: button_rect,
                },
            ],
            handler,
        );

        self.paint(ui, zone_id, rect);
        let open = ui
            .put(button_rect, Button::new(RichText::new("📂 Open files").size(16.0)))
            .on_hover_text("Open files");
        if open.clicked() {
            self.controller.request_open_files();
        }
        if self.controller.has_pending_dialog() {
            ui.ctx().request_repaint_after(DIALOG_POLL_INTERVAL);
        }
        response
    }

    fn dispatch_drag_input<H: DropZoneHandler + ?Sized>(
        &mut self,
        ctx: &egui::Context,
        targets: &[DropTarget],
        handler: &mut H,
    ) {
        let events = self.adapter.translate(FrameDragInput::capture(ctx), targets);
        for event in events {
            let disposition = self.controller.handle_event(event, handler);
            if disposition.stop_propagation {
                ctx.input_mut(|i| i.raw.dropped_files.clear());
            }
            if disposition.prevent_default {
                ctx.set_cursor_icon(CursorIcon::Copy);
            }
        }
    }

    fn paint(&self, ui: &Ui, zone_id: Id, rect: Rect) {
        let highlight = ui.ctx().animate_bool_with_time(
            zone_id.with("highlight"),
            self.controller.is_dragging(),
            0.15,
        );
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, style::drop_zone_fill(highlight));
        painter.rect_stroke(
            rect.shrink(1.0),
            0.0,
            style::drop_zone_border(highlight),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center() - egui::vec2(0.0, 24.0),
            Align2::CENTER_CENTER,
            self.controller.prompt(),
            FontId::proportional(PROMPT_FONT_SIZE),
            style::palette().text_primary,
        );
    }
}
