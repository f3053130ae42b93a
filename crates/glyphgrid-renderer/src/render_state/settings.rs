use glyphgrid_common::{Color, Vec2};
use glyphgrid_config::{parse_color, GlyphgridConfig};

/// Per-frame constants that come from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Glyph cell background.
    pub background: Color,
    /// Surface clear colour.
    pub clear: Color,
    /// World offset applied to every glyph.
    pub origin: Vec2,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: Color::from_rgba(0x4d, 0x4d, 0x4d, 255),
            clear: Color::BLACK,
            origin: Vec2::ZERO,
        }
    }
}

impl RenderSettings {
    /// Build from config. Unparseable colours keep their defaults.
    pub fn from_config(config: &GlyphgridConfig) -> Self {
        let defaults = Self::default();
        Self {
            background: color_or(&config.colors.background, defaults.background),
            clear: color_or(&config.colors.clear, defaults.clear),
            origin: defaults.origin,
        }
    }
}

fn color_or(value: &str, fallback: Color) -> Color {
    match parse_color(value) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("{e}, using {}", fallback.to_hex());
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_default_config() {
        let from_config = RenderSettings::from_config(&GlyphgridConfig::default());
        assert_eq!(from_config, RenderSettings::default());
    }

    #[test]
    fn config_colors_are_used() {
        let mut config = GlyphgridConfig::default();
        config.colors.background = "#102030".into();
        config.colors.clear = "rgb(1,2,3)".into();
        let s = RenderSettings::from_config(&config);
        assert_eq!(s.background, Color::from_rgba(0x10, 0x20, 0x30, 255));
        assert_eq!(s.clear, Color::from_rgba(1, 2, 3, 255));
    }

    #[test]
    fn bad_color_falls_back() {
        let mut config = GlyphgridConfig::default();
        config.colors.background = "not a color".into();
        let s = RenderSettings::from_config(&config);
        assert_eq!(s.background, RenderSettings::default().background);
    }
}
