use std::io::Write;
use std::path::Path;

use super::load::config_path;
use super::types::{ConfigError, DropZoneConfig};

/// Persist the configuration to the app directory.
pub fn save(config: &DropZoneConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Write the config as TOML, creating parent directories as needed.
pub fn save_to_path(config: &DropZoneConfig, path: &Path) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    atomic_write(path, data.as_bytes())
}

/// Write through a sibling temp file so a crash never leaves half a config.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| write_error(std::io::Error::other("config path has no file name")))?;
    let tmp_path = path.with_file_name(format!(
        "{}.tmp-{:012x}",
        file_name.to_string_lossy(),
        rand::random::<u64>() & 0xffff_ffff_ffff
    ));
    let result = std::fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&tmp_path, path));
    if let Err(err) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_error(err));
    }
    Ok(())
}
