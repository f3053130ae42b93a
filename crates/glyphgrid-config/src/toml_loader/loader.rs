use crate::schema::GlyphgridConfig;
use crate::validation;
use glyphgrid_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse TOML text. Absent sections and fields keep their defaults.
pub fn parse_config(content: &str) -> Result<GlyphgridConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Read and parse one config file.
///
/// Out-of-range values are only warned about here; [`crate::load_config`]
/// is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<GlyphgridConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let config = parse_config(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("{}: {e}", path.display());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the user's config, writing the default template first if there is
/// none yet.
pub fn load_default() -> Result<GlyphgridConfig, ConfigError> {
    let path = default_config_path()?;

    if path.exists() {
        return load_from_path(&path);
    }

    info!("no config at {}, writing defaults", path.display());
    create_default_config(&path)?;
    Ok(GlyphgridConfig::default())
}
