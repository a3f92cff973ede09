//! Turns egui's per-frame file hover/drop input into enter/leave/over/drop
//! events.

use crate::egui_app::controller::DragEvent;
use egui::{DroppedFile, Id, Pos2, Rect};

/// A region that can be the target of drag events.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DropTarget {
    pub id: Id,
    pub rect: Rect,
}

/// File drag input observed in one frame.
#[derive(Clone, Debug, Default)]
pub(crate) struct FrameDragInput {
    pub files_hovering: bool,
    pub pointer: Option<Pos2>,
    pub dropped: Vec<DroppedFile>,
}

impl FrameDragInput {
    pub(crate) fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            files_hovering: !i.raw.hovered_files.is_empty(),
            pointer: i.pointer.hover_pos().or_else(|| i.pointer.interact_pos()),
            dropped: i.raw.dropped_files.clone(),
        })
    }
}

/// Remembers the hovered target between frames.
#[derive(Debug, Default)]
pub(crate) struct DragEventAdapter {
    hovered: Option<Id>,
}

impl DragEventAdapter {
    /// `targets` must list the outermost region (the zone) first and nested
    /// regions after their parents.
    pub(crate) fn translate(&mut self, input: FrameDragInput, targets: &[DropTarget]) -> Vec<DragEvent> {
        let Some(zone) = targets.first() else {
            return Vec::new();
        };
        if !input.dropped.is_empty() && input.pointer.is_none_or(|pos| zone.rect.contains(pos)) {
            // A drop ends the gesture without a leave.
            let target = self
                .hovered
                .take()
                .or_else(|| hit_target(targets, input.pointer))
                .unwrap_or(zone.id);
            return vec![DragEvent::Drop {
                target,
                files: input.dropped,
            }];
        }

        let current = if input.files_hovering {
            hit_target(targets, input.pointer)
        } else {
            None
        };
        let mut events = Vec::new();
        if current != self.hovered {
            // Enter on the new target fires before leave on the old one.
            if let Some(entered) = current {
                events.push(DragEvent::Enter(entered));
            }
            if let Some(left) = self.hovered {
                events.push(DragEvent::Leave(left));
            }
            self.hovered = current;
        }
        if let Some(target) = current {
            events.push(DragEvent::Over(target));
        }
        events
    }
}

/// Innermost target under the pointer. Without a pointer position (some
/// platforms stop reporting it during OS drags) the zone itself is hit.
fn hit_target(targets: &[DropTarget], pointer: Option<Pos2>) -> Option<Id> {
    let Some(pos) = pointer else {
        return targets.first().map(|target| target.id);
    };
    targets
        .iter()
        .rev()
        .find(|target| target.rect.contains(pos))
        .map(|target| target.id)
}
