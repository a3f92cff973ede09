use egui::Id;

/// Change in the dragging flag caused by one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTransition {
    Unchanged,
    Started,
    Ended,
}

/// Tracks whether files are being dragged over the zone.
///
/// Nested elements fire their own enter/leave pairs, so only a leave from
/// the element that fired the most recent enter ends the drag.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    dragging: bool,
    enter_target: Option<Id>,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn enter_target(&self) -> Option<Id> {
        self.enter_target
    }

    pub fn enter(&mut self, target: Id) -> DragTransition {
        self.enter_target = Some(target);
        self.set_dragging(true)
    }

    pub fn leave(&mut self, target: Id) -> DragTransition {
        if self.enter_target != Some(target) {
            return DragTransition::Unchanged;
        }
        self.enter_target = None;
        self.set_dragging(false)
    }

    /// Finish a drop. Returns false when no drag was in progress, in which
    /// case the drop must be ignored.
    pub fn take_drop(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.enter_target = None;
        self.set_dragging(false);
        true
    }

    fn set_dragging(&mut self, dragging: bool) -> DragTransition {
        if self.dragging == dragging {
            return DragTransition::Unchanged;
        }
        self.dragging = dragging;
        if dragging {
            DragTransition::Started
        } else {
            DragTransition::Ended
        }
    }
}
