use std::{cell::RefCell, rc::Rc};

use dropzone::dialog::{DialogResponse, DialogService, FileInfo, OpenDialogRequest, RequestId};

#[derive(Default)]
struct State {
    sent: Vec<(RequestId, OpenDialogRequest)>,
    inbox: Vec<DialogResponse>,
}

/// Dialog service the test drives by hand.
#[derive(Clone, Default)]
pub struct ScriptedDialog(Rc<RefCell<State>>);

impl ScriptedDialog {
    pub fn respond(&self, request_id: RequestId, files: Vec<FileInfo>) {
        self.0
            .borrow_mut()
            .inbox
            .push(DialogResponse { request_id, files });
    }

    pub fn sent(&self) -> Vec<(RequestId, OpenDialogRequest)> {
        self.0.borrow().sent.clone()
    }
}

impl DialogService for ScriptedDialog {
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
