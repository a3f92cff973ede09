//! Open-file dialog exchange.
//!
//! The drop zone never opens a dialog itself. It sends a `showOpenDialog`
//! request through a [`DialogService`] and later polls for the matching
//! `showOpenDialog:response`. Requests are fire-and-forget: a service that
//! never answers simply leaves the request pending.

mod messages;
mod native;
mod one_shot;

pub use messages::{
    DialogError, DialogProperty, DialogResponse, FileInfo, IpcEnvelope, OpenDialogRequest,
    RequestEnvelope, RequestId, ResponseEnvelope, SHOW_OPEN_DIALOG, SHOW_OPEN_DIALOG_RESPONSE,
};
pub use native::NativeDialogService;
pub use one_shot::OneShotResponses;

/// Transport for open-dialog requests and their responses.
pub trait DialogService {
    /// Send a request. Never blocks waiting for the user.
    fn send(&mut self, request_id: RequestId, request: OpenDialogRequest);

    /// Next response that arrived since the last call, if any.
    fn try_recv(&mut self) -> Option<DialogResponse>;
}
