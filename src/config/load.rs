use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::CONFIG_FILE_NAME;
use super::save::save_to_path;
use super::types::{ConfigError, DropZoneConfig};

/// Resolve the configuration file path, ensuring the app directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration, writing defaults on first run.
pub fn load_or_default() -> Result<DropZoneConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    let config = DropZoneConfig::default();
    save_to_path(&config, &path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(config)
}

/// Read and normalize a config file. Missing keys take their defaults.
pub fn load_from_path(path: &Path) -> Result<DropZoneConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DropZoneConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config.normalized())
}
