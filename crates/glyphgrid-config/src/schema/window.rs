//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-8192).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 150-8192).
    pub height: u32,
    /// Present with `AutoVsync` rather than `AutoNoVsync`.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glyphgrid".into(),
            width: 1280,
            height: 800,
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "glyphgrid");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert!(config.vsync);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("vsync = false\nwidth = 640").unwrap();
        assert!(!config.vsync);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 800);
    }
}
