use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::AppDirError;
use crate::dialog::DialogProperty;

/// Quotes shown while files hover over the drop zone.
pub const DEFAULT_QUOTES: [&str; 2] = ["Cast it into the fire! 🔥", "Go ahead, make my day"];
const DEFAULT_INVITATION: &str = "Drop audio and video files here";
const DEFAULT_DIALOG_MESSAGE: &str = "Select audio and video files";

/// User-facing text and dialog options for the drop zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropZoneConfig {
    /// Prompt shown while nothing is being dragged.
    pub invitation: String,
    /// Title passed to the open-file dialog.
    pub dialog_message: String,
    /// Quotes cycled through while dragging.
    pub quotes: Vec<String>,
    /// Allow picking several files in one dialog.
    pub allow_multiple: bool,
    /// Optional extension filter for the dialog (lowercase, without dots).
    /// Empty means every file is selectable.
    pub dialog_extensions: Vec<String>,
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            invitation: DEFAULT_INVITATION.to_string(),
            dialog_message: DEFAULT_DIALOG_MESSAGE.to_string(),
            quotes: DEFAULT_QUOTES.iter().map(|quote| quote.to_string()).collect(),
            allow_multiple: true,
            dialog_extensions: Vec::new(),
        }
    }
}

impl DropZoneConfig {
    /// Repair values that would leave the widget without text to show.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        self.quotes.retain(|quote| !quote.trim().is_empty());
        if self.quotes.is_empty() {
            tracing::warn!("Config has no usable quotes; falling back to defaults");
            self.quotes = defaults.quotes;
        }
        if self.invitation.trim().is_empty() {
            self.invitation = defaults.invitation;
        }
        self.dialog_extensions = self
            .dialog_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Capability flags requested from the open dialog.
    pub fn dialog_properties(&self) -> Vec<DialogProperty> {
        let mut properties = vec![DialogProperty::OpenFile];
        if self.allow_multiple {
            properties.push(DialogProperty::MultiSelections);
        }
        properties
    }
}

/// Errors that may occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error("Config directory unavailable: {0}")]
    AppDir(#[from] AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`DropZoneConfig`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The config could not be serialized.
    #[error("Failed to serialize config for {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
