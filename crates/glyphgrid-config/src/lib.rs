//! glyphgrid configuration.
//!
//! TOML-based configuration with full validation. Every section uses serde
//! defaults, so a partial (or empty) config file is valid.
//!
//! ```rust,no_run
//! use glyphgrid_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{} glyph slots", config.buffer.max_glyphs);
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use colors::parse_color;
pub use schema::{GlyphgridConfig, CONFIG_SCHEMA_VERSION};

use glyphgrid_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented default file written to it on first
/// run. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<GlyphgridConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GlyphgridConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlyphgridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.buffer.max_glyphs, 10_000);
        assert_eq!(parsed.colors.background, "#4d4d4d");
    }

    #[test]
    fn load_config_explicit_missing_path_is_file_not_found() {
        let err = load_config(Some(Path::new("/tmp/glyphgrid_missing_config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_explicit_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[buffer]\nmax_glyphs = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("buffer.max_glyphs"));
    }

    #[test]
    fn load_config_explicit_path_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[viewport]\ninitial_zoom = -2.5\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!((config.viewport.initial_zoom + 2.5).abs() < f32::EPSILON);
    }
}
