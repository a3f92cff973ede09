use std::path::PathBuf;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Channel carrying open-dialog requests.
pub const SHOW_OPEN_DIALOG: &str = "showOpenDialog";
/// Channel carrying open-dialog responses.
pub const SHOW_OPEN_DIALOG_RESPONSE: &str = "showOpenDialog:response";

/// Correlates a dialog request with its response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

/// Capability flags understood by the dialog service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogProperty {
    OpenFile,
    OpenDirectory,
    MultiSelections,
}

/// Payload of a `showOpenDialog` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDialogRequest {
    pub message: String,
    pub properties: Vec<DialogProperty>,
}

impl OpenDialogRequest {
    pub fn allows(&self, property: DialogProperty) -> bool {
        self.properties.contains(&property)
    }
}

/// A file chosen through the dialog. Owned by the dialog service; the drop
/// zone only passes it along.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub name: String,
}

impl FileInfo {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

/// Files returned for one request. An empty list means the user cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogResponse {
    pub request_id: RequestId,
    pub files: Vec<FileInfo>,
}

/// Wire form of a message crossing the dialog boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpcEnvelope<T> {
    pub channel: String,
    pub request_id: RequestId,
    pub payload: T,
}

pub type RequestEnvelope = IpcEnvelope<OpenDialogRequest>;
pub type ResponseEnvelope = IpcEnvelope<Vec<FileInfo>>;

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("Failed to encode {channel} message: {source}")]
    Encode {
        channel: String,
        source: serde_json::Error,
    },
    #[error("Malformed dialog message: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Unexpected channel {found:?}, expected {expected:?}")]
    Channel { expected: &'static str, found: String },
}

impl RequestEnvelope {
    pub fn request(request_id: RequestId, payload: OpenDialogRequest) -> Self {
        Self {
            channel: SHOW_OPEN_DIALOG.to_string(),
            request_id,
            payload,
        }
    }
}

impl ResponseEnvelope {
    pub fn response(request_id: RequestId, files: Vec<FileInfo>) -> Self {
        Self {
            channel: SHOW_OPEN_DIALOG_RESPONSE.to_string(),
            request_id,
            payload: files,
        }
    }

    /// Decode a response envelope, rejecting messages from other channels.
    pub fn decode_response(text: &str) -> Result<DialogResponse, DialogError> {
        let envelope: Self = Self::from_json(text)?;
        if envelope.channel != SHOW_OPEN_DIALOG_RESPONSE {
            return Err(DialogError::Channel {
                expected: SHOW_OPEN_DIALOG_RESPONSE,
                found: envelope.channel,
            });
        }
        Ok(DialogResponse {
            request_id: envelope.request_id,
            files: envelope.payload,
        })
    }
}

impl<T: Serialize> IpcEnvelope<T> {
    pub fn to_json(&self) -> Result<String, DialogError> {
        serde_json::to_string(self).map_err(|source| DialogError::Encode {
            channel: self.channel.clone(),
            source,
        })
    }
}

impl<T: DeserializeOwned> IpcEnvelope<T> {
    pub fn from_json(text: &str) -> Result<Self, DialogError> {
        Ok(serde_json::from_str(text)?)
    }
}
