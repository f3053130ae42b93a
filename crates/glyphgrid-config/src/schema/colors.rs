//! Colour configuration types.

use serde::{Deserialize, Serialize};

/// Colour strings; any format accepted by [`crate::parse_color`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Glyph cell background, blended under every glyph.
    pub background: String,
    /// Default glyph colour for loaded documents.
    pub foreground: String,
    /// Surface clear colour outside glyph cells.
    pub clear: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#4d4d4d".into(),
            foreground: "#e0e0e0".into(),
            clear: "#000000".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_config_defaults() {
        let config = ColorConfig::default();
        assert_eq!(config.background, "#4d4d4d");
        assert_eq!(config.foreground, "#e0e0e0");
        assert_eq!(config.clear, "#000000");
    }
}
