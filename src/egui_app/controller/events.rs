use crate::dialog::FileInfo;
use egui::{DroppedFile, Id};

/// Drag events as seen by the drop zone. Targets are compared by identity.
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent {
    Enter(Id),
    Leave(Id),
    Over(Id),
    Drop { target: Id, files: Vec<DroppedFile> },
}

/// How the host should treat an event after the drop zone handled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventDisposition {
    /// Signal that the zone accepts the drag instead of the platform default.
    pub prevent_default: bool,
    /// Keep the event away from anything outside the zone.
    pub stop_propagation: bool,
}

impl EventDisposition {
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };
    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };
    pub const CONSUME: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Callbacks supplied by whoever owns the drop zone.
pub trait DropZoneHandler {
    /// Files dropped onto the zone, passed through untouched.
    fn on_drop_files(&mut self, files: Vec<DroppedFile>);

    /// Files picked through the open dialog. Never called with an empty list.
    fn on_open_files(&mut self, files: Vec<FileInfo>);
}
