use glyphgrid_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const CONFIG_DIR_NAME: &str = "glyphgrid";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the config file lives under a platform config directory.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// `config.toml` under the platform config directory
/// (`~/.config/glyphgrid` on Linux, `~/Library/Application Support/glyphgrid`
/// on macOS).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented default template to `path`, creating parent
/// directories as needed. Overwrites an existing file.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |action: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {action} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("create directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("write", path, e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
