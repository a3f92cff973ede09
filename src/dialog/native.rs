use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use rfd::FileDialog;

use super::{
    DialogProperty, DialogResponse, DialogService, FileInfo, OpenDialogRequest, RequestEnvelope,
    RequestId, ResponseEnvelope,
};

/// Dialog service backed by the platform file picker.
///
/// Responses travel back as encoded envelopes over a channel and are decoded
/// in [`DialogService::try_recv`], the same way they would arrive from a
/// separate dialog process.
pub struct NativeDialogService {
    extensions: Vec<String>,
    response_tx: Sender<String>,
    response_rx: Receiver<String>,
}

impl NativeDialogService {
    /// `extensions` restricts the picker to those file types when non-empty.
    pub fn new(extensions: Vec<String>) -> Self {
        let (response_tx, response_rx) = channel();
        Self {
            extensions,
            response_tx,
            response_rx,
        }
    }
}

impl DialogService for NativeDialogService {
    fn send(&mut self, request_id: RequestId, request: OpenDialogRequest) {
        let envelope = RequestEnvelope::request(request_id, request);
        match envelope.to_json() {
            Ok(json) => tracing::debug!(%json, "Sending open dialog request"),
            Err(err) => tracing::warn!("{err}"),
        }
        let job = DialogJob {
            request_id,
            request: envelope.payload,
            extensions: self.extensions.clone(),
            response_tx: self.response_tx.clone(),
        };
        dispatch(job);
    }

    fn try_recv(&mut self) -> Option<DialogResponse> {
        loop {
            let text = match self.response_rx.try_recv() {
                Ok(text) => text,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return None,
            };
            match ResponseEnvelope::decode_response(&text) {
                Ok(response) => return Some(response),
                Err(err) => tracing::warn!("Dropping dialog response: {err}"),
            }
        }
    }
}

struct DialogJob {
    request_id: RequestId,
    request: OpenDialogRequest,
    extensions: Vec<String>,
    response_tx: Sender<String>,
}

impl DialogJob {
    fn run(self) {
        let files = pick(&self.request, &self.extensions)
            .into_iter()
            .map(FileInfo::from_path)
            .collect::<Vec<_>>();
        tracing::debug!(
            request_id = self.request_id.0,
            count = files.len(),
            "Open dialog closed"
        );
        match ResponseEnvelope::response(self.request_id, files).to_json() {
            Ok(json) => {
                let _ = self.response_tx.send(json);
            }
            Err(err) => tracing::warn!("{err}"),
        }
    }
}

// macOS only allows native panels on the main thread.
#[cfg(target_os = "macos")]
fn dispatch(job: DialogJob) {
    job.run();
}

#[cfg(not(target_os = "macos"))]
fn dispatch(job: DialogJob) {
    let request_id = job.request_id;
    let spawned = std::thread::Builder::new()
        .name("open-dialog".into())
        .spawn(move || job.run());
    if let Err(err) = spawned {
        tracing::warn!(
            request_id = request_id.0,
            "Failed to spawn open dialog thread: {err}"
        );
    }
}

fn pick(request: &OpenDialogRequest, extensions: &[String]) -> Vec<PathBuf> {
    let mut dialog = FileDialog::new().set_title(request.message.as_str());
    if !extensions.is_empty() {
        dialog = dialog.add_filter("Media", extensions);
    }
    let multiple = request.allows(DialogProperty::MultiSelections);
    let directories = request.allows(DialogProperty::OpenDirectory)
        && !request.allows(DialogProperty::OpenFile);
    match (directories, multiple) {
        (true, true) => dialog.pick_folders().unwrap_or_default(),
        (true, false) => dialog.pick_folder().into_iter().collect(),
        (false, true) => dialog.pick_files().unwrap_or_default(),
        (false, false) => dialog.pick_file().into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_responses_decode_in_order() {
        let mut service = NativeDialogService::new(Vec::new());
        let first = ResponseEnvelope::response(RequestId(1), Vec::new());
        let second = ResponseEnvelope::response(
            RequestId(2),
            vec![FileInfo::from_path(PathBuf::from("a.wav"))],
        );
        service.response_tx.send(first.to_json().unwrap()).unwrap();
        service.response_tx.send("{".into()).unwrap();
        service.response_tx.send(second.to_json().unwrap()).unwrap();

        assert_eq!(service.try_recv().unwrap().request_id, RequestId(1));
        let next = service.try_recv().unwrap();
        assert_eq!(next.request_id, RequestId(2));
        assert_eq!(next.files.len(), 1);
        assert!(service.try_recv().is_none());
    }
}
