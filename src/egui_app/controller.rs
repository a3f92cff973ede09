//! Drop zone behavior, independent of how the zone is drawn.

mod events;

#[cfg(test)]
mod tests;

pub use events::{DragEvent, DropZoneHandler, EventDisposition};

use crate::config::DropZoneConfig;
use crate::dialog::{DialogProperty, DialogService, OneShotResponses, OpenDialogRequest, RequestId};
use crate::egui_app::state::{DragTracker, DragTransition, QuoteDeck};
use rand::{SeedableRng, rngs::StdRng};

/// Owns drag and quote state and forwards file selections to the owner.
pub struct DropZoneController {
    invitation: String,
    dialog_message: String,
    dialog_properties: Vec<DialogProperty>,
    drag: DragTracker,
    quotes: QuoteDeck,
    rng: StdRng,
    responses: OneShotResponses,
    dialog: Box<dyn DialogService>,
}

impl DropZoneController {
    pub fn new(config: &DropZoneConfig, dialog: Box<dyn DialogService>) -> Self {
        Self::with_rng(config, dialog, StdRng::from_os_rng())
    }

    /// Controller with a reproducible quote sequence.
    pub fn with_seed(config: &DropZoneConfig, dialog: Box<dyn DialogService>, seed: u64) -> Self {
        Self::with_rng(config, dialog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &DropZoneConfig, dialog: Box<dyn DialogService>, mut rng: StdRng) -> Self {
        let quotes = QuoteDeck::new(config.quotes.clone(), &mut rng);
        Self::assemble(config, dialog, quotes, rng)
    }

    /// Controller whose deck starts at `quote_index` before the mount shuffle.
    pub fn with_quote_index(
        config: &DropZoneConfig,
        dialog: Box<dyn DialogService>,
        quote_index: usize,
        seed: u64,
    ) -> Self {
        let quotes = QuoteDeck::with_index(config.quotes.clone(), quote_index);
        Self::assemble(config, dialog, quotes, StdRng::seed_from_u64(seed))
    }

    fn assemble(
        config: &DropZoneConfig,
        dialog: Box<dyn DialogService>,
        quotes: QuoteDeck,
        rng: StdRng,
    ) -> Self {
        let mut controller = Self {
            invitation: config.invitation.clone(),
            dialog_message: config.dialog_message.clone(),
            dialog_properties: config.dialog_properties(),
            drag: DragTracker::default(),
            quotes,
            rng,
            responses: OneShotResponses::default(),
            dialog,
        };
        // Mounting counts as entering the "not dragging" phase.
        controller.shuffle_quote();
        controller
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn quote_index(&self) -> usize {
        self.quotes.index()
    }

    /// Text to show right now: the invitation at rest, a quote while dragging.
    pub fn prompt(&self) -> &str {
        if self.drag.is_dragging() {
            self.quotes.current().unwrap_or(self.invitation.as_str())
        } else {
            &self.invitation
        }
    }

    pub fn has_pending_dialog(&self) -> bool {
        !self.responses.is_empty()
    }

    /// Apply one drag event and report how the host should treat it.
    pub fn handle_event<H: DropZoneHandler + ?Sized>(
        &mut self,
        event: DragEvent,
        handler: &mut H,
    ) -> EventDisposition {
        match event {
            DragEvent::Enter(target) => {
                self.drag.enter(target);
                EventDisposition::PASS
            }
            DragEvent::Leave(target) => {
                if self.drag.leave(target) == DragTransition::Ended {
                    self.shuffle_quote();
                }
                EventDisposition::PASS
            }
            DragEvent::Over(_) => EventDisposition::PREVENT_DEFAULT,
            DragEvent::Drop { files, .. } => {
                if !self.drag.take_drop() {
                    tracing::debug!(count = files.len(), "Ignoring drop without a drag");
                    return EventDisposition::CONSUME;
                }
                self.shuffle_quote();
                tracing::info!(count = files.len(), "Files dropped");
                handler.on_drop_files(files);
                EventDisposition::CONSUME
            }
        }
    }

    /// Ask the dialog service for files. The response is picked up by
    /// [`Self::poll_dialog_responses`].
    pub fn request_open_files(&mut self) -> RequestId {
        let request_id = self.responses.register();
        let request = OpenDialogRequest {
            message: self.dialog_message.clone(),
            properties: self.dialog_properties.clone(),
        };
        tracing::info!(request_id = request_id.0, "Requesting open dialog");
        self.dialog.send(request_id, request);
        request_id
    }

    /// Deliver every response that arrived since the last poll. Returns how
    /// many times `on_open_files` was invoked.
    pub fn poll_dialog_responses<H: DropZoneHandler + ?Sized>(&mut self, handler: &mut H) -> usize {
        let mut delivered = 0;
        while let Some(response) = self.dialog.try_recv() {
            if !self.responses.take(response.request_id) {
                tracing::debug!(
                    request_id = response.request_id.0,
                    "Ignoring unexpected dialog response"
                );
                continue;
            }
            if response.files.is_empty() {
                tracing::debug!(request_id = response.request_id.0, "Open dialog cancelled");
                continue;
            }
            tracing::info!(
                request_id = response.request_id.0,
                count = response.files.len(),
                "Files chosen from dialog"
            );
            handler.on_open_files(response.files);
            delivered += 1;
        }
        delivered
    }

    fn shuffle_quote(&mut self) {
        self.quotes.advance(&mut self.rng);
    }
}
