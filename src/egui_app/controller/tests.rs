use super::*;
use crate::config::DEFAULT_QUOTES;
use crate::dialog::{DialogResponse, FileInfo};
use egui::{DroppedFile, Id};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Default)]
struct FakeDialogState {
    sent: Vec<(RequestId, OpenDialogRequest)>,
    inbox: Vec<DialogResponse>,
}

#[derive(Clone, Default)]
struct FakeDialog(Rc<RefCell<FakeDialogState>>);

impl FakeDialog {
    fn respond(&self, request_id: RequestId, files: Vec<FileInfo>) {
        self.0
            .borrow_mut()
            .inbox
            .push(DialogResponse { request_id, files });
    }

    fn sent(&self) -> Vec<(RequestId, OpenDialogRequest)> {
        self.0.borrow().sent.clone()
    }
}

impl DialogService for FakeDialog {
    fn send(&mut self, request_id: RequestId, request: OpenDialogRequest) {
        self.0.borrow_mut().sent.push((request_id, request));
    }

    fn try_recv(&mut self) -> Option<DialogResponse> {
        let mut state = self.0.borrow_mut();
        if state.inbox.is_empty() {
            None
        } else {
            Some(state.inbox.remove(0))
        }
    }
}

#[derive(Default)]
struct Recorder {
    dropped: Vec<Vec<DroppedFile>>,
    opened: Vec<Vec<FileInfo>>,
}

impl DropZoneHandler for Recorder {
    fn on_drop_files(&mut self, files: Vec<DroppedFile>) {
        self.dropped.push(files);
    }

    fn on_open_files(&mut self, files: Vec<FileInfo>) {
        self.opened.push(files);
    }
}

fn zone() -> Id {
    Id::new("drop_zone")
}

fn button() -> Id {
    zone().with("open_button")
}

fn dropped(name: &str) -> Vec<DroppedFile> {
    vec![DroppedFile {
        path: Some(PathBuf::from(name)),
        name: name.to_string(),
        ..Default::default()
    }]
}

fn controller_with(dialog: FakeDialog, config: &DropZoneConfig) -> DropZoneController {
    DropZoneController::with_seed(config, Box::new(dialog), 11)
}

fn controller() -> (DropZoneController, FakeDialog) {
    let dialog = FakeDialog::default();
    let controller = controller_with(dialog.clone(), &DropZoneConfig::default());
    (controller, dialog)
}

#[test]
fn enter_then_leave_same_target_stops_dragging() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    controller.handle_event(DragEvent::Enter(zone()), &mut handler);
    assert!(controller.is_dragging());
    controller.handle_event(DragEvent::Leave(zone()), &mut handler);
    assert!(!controller.is_dragging());
}

#[test]
fn leaving_nested_target_keeps_dragging() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    controller.handle_event(DragEvent::Enter(zone()), &mut handler);
    controller.handle_event(DragEvent::Enter(button()), &mut handler);
    controller.handle_event(DragEvent::Leave(zone()), &mut handler);
    assert!(controller.is_dragging());
    controller.handle_event(DragEvent::Leave(button()), &mut handler);
    assert!(!controller.is_dragging());
}

#[test]
fn drop_without_drag_is_ignored() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    let disposition = controller.handle_event(
        DragEvent::Drop {
            target: zone(),
            files: dropped("a.wav"),
        },
        &mut handler,
    );
    assert!(handler.dropped.is_empty());
    assert_eq!(disposition, EventDisposition::CONSUME);
}

#[test]
fn drop_while_dragging_forwards_payload_once() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    controller.handle_event(DragEvent::Enter(zone()), &mut handler);
    let files = dropped("clip.mov");
    controller.handle_event(
        DragEvent::Drop {
            target: zone(),
            files: files.clone(),
        },
        &mut handler,
    );
    controller.handle_event(
        DragEvent::Drop {
            target: zone(),
            files: dropped("again.mov"),
        },
        &mut handler,
    );
    assert_eq!(handler.dropped, vec![files]);
    assert!(!controller.is_dragging());
}

#[test]
fn drag_over_prevents_default_only() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    let disposition = controller.handle_event(DragEvent::Over(zone()), &mut handler);
    assert_eq!(disposition, EventDisposition::PREVENT_DEFAULT);
}

#[test]
fn mount_moves_off_the_initial_quote() {
    let config = DropZoneConfig::default();
    assert_eq!(config.quotes.len(), DEFAULT_QUOTES.len());
    let controller =
        DropZoneController::with_quote_index(&config, Box::new(FakeDialog::default()), 0, 3);
    assert_eq!(controller.quote_index(), 1);
}

#[test]
fn every_drag_end_changes_the_quote() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    for round in 0..6 {
        let before = controller.quote_index();
        controller.handle_event(DragEvent::Enter(zone()), &mut handler);
        assert_eq!(controller.quote_index(), before);
        if round % 2 == 0 {
            controller.handle_event(DragEvent::Leave(zone()), &mut handler);
        } else {
            controller.handle_event(
                DragEvent::Drop {
                    target: zone(),
                    files: dropped("x.wav"),
                },
                &mut handler,
            );
        }
        assert_ne!(controller.quote_index(), before);
    }
}

#[test]
fn ignored_leave_does_not_change_the_quote() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    controller.handle_event(DragEvent::Enter(zone()), &mut handler);
    controller.handle_event(DragEvent::Enter(button()), &mut handler);
    let before = controller.quote_index();
    controller.handle_event(DragEvent::Leave(zone()), &mut handler);
    assert_eq!(controller.quote_index(), before);
}

#[test]
fn single_quote_never_changes() {
    let config = DropZoneConfig {
        quotes: vec!["Only one".into()],
        ..DropZoneConfig::default()
    };
    let mut controller = controller_with(FakeDialog::default(), &config);
    let mut handler = Recorder::default();
    assert_eq!(controller.quote_index(), 0);
    controller.handle_event(DragEvent::Enter(zone()), &mut handler);
    controller.handle_event(DragEvent::Leave(zone()), &mut handler);
    assert_eq!(controller.quote_index(), 0);
}

#[test]
fn prompt_switches_with_drag_state() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    assert_eq!(controller.prompt(), "Drop audio and video files here");
    controller.handle_event(DragEvent::Enter(zone()), &mut handler);
    assert!(DEFAULT_QUOTES.contains(&controller.prompt()));
}

#[test]
fn open_request_carries_prompt_and_capabilities() {
    let (mut controller, dialog) = controller();
    let id = controller.request_open_files();
    let sent = dialog.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, id);
    assert_eq!(sent[0].1.message, "Select audio and video files");
    assert_eq!(
        sent[0].1.properties,
        vec![DialogProperty::OpenFile, DialogProperty::MultiSelections]
    );
    assert!(controller.has_pending_dialog());
}

#[test]
fn non_empty_response_reaches_owner_once() {
    let (mut controller, dialog) = controller();
    let mut handler = Recorder::default();
    let id = controller.request_open_files();
    let files = vec![FileInfo::from_path(PathBuf::from("/media/a.wav"))];
    dialog.respond(id, files.clone());
    dialog.respond(id, files.clone());

    assert_eq!(controller.poll_dialog_responses(&mut handler), 1);
    assert_eq!(controller.poll_dialog_responses(&mut handler), 0);
    assert_eq!(handler.opened, vec![files]);
    assert!(!controller.has_pending_dialog());
}

#[test]
fn empty_response_is_a_silent_cancel() {
    let (mut controller, dialog) = controller();
    let mut handler = Recorder::default();
    let id = controller.request_open_files();
    dialog.respond(id, Vec::new());

    assert_eq!(controller.poll_dialog_responses(&mut handler), 0);
    assert!(handler.opened.is_empty());
    assert!(!controller.has_pending_dialog());
}

#[test]
fn unanswered_request_stays_pending() {
    let (mut controller, _) = controller();
    let mut handler = Recorder::default();
    controller.request_open_files();
    assert_eq!(controller.poll_dialog_responses(&mut handler), 0);
    assert!(controller.has_pending_dialog());
}

#[test]
fn responses_match_their_own_requests() {
    let (mut controller, dialog) = controller();
    let mut handler = Recorder::default();
    let first = controller.request_open_files();
    let second = controller.request_open_files();
    dialog.respond(second, vec![FileInfo::from_path(PathBuf::from("b.mp4"))]);
    dialog.respond(RequestId(999), vec![FileInfo::from_path(PathBuf::from("c.mp4"))]);

    assert_eq!(controller.poll_dialog_responses(&mut handler), 1);
    assert_eq!(handler.opened[0][0].name, "b.mp4");
    assert!(controller.has_pending_dialog());

    dialog.respond(first, vec![FileInfo::from_path(PathBuf::from("a.mp4"))]);
    assert_eq!(controller.poll_dialog_responses(&mut handler), 1);
    assert!(!controller.has_pending_dialog());
}

#[test]
fn single_selection_config_drops_multi_flag() {
    let dialog = FakeDialog::default();
    let config = DropZoneConfig {
        allow_multiple: false,
        ..DropZoneConfig::default()
    };
    let mut controller = controller_with(dialog.clone(), &config);
    controller.request_open_files();
    assert_eq!(dialog.sent()[0].1.properties, vec![DialogProperty::OpenFile]);
}
