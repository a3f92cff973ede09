//! Drop zone settings stored as TOML in the app directory.

mod load;
mod save;
mod types;


/// Default filename used to store the drop zone configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use load::{config_path, load_from_path, load_or_default};
pub use save::{save, save_to_path};
pub use types::{ConfigError, DEFAULT_QUOTES, DropZoneConfig};
