//! Mouse input tuning.

use serde::{Deserialize, Serialize};

/// How wheel and trackpad scrolling maps to zoom deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Zoom delta per wheel line (valid range: 0.01-5.0).
    pub wheel_line_zoom: f32,
    /// Zoom delta per pixel of trackpad scroll (valid range: 0.0001-1.0).
    pub wheel_pixel_zoom: f32,
    /// Flip the scroll direction.
    pub invert_zoom: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_line_zoom: 0.5,
            wheel_pixel_zoom: 0.01,
            invert_zoom: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_config_defaults() {
        let config = InputConfig::default();
        assert!((config.wheel_line_zoom - 0.5).abs() < f32::EPSILON);
        assert!((config.wheel_pixel_zoom - 0.01).abs() < f32::EPSILON);
        assert!(!config.invert_zoom);
    }
}
