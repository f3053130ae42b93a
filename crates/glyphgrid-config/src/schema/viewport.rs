//! Initial viewport placement.

use serde::{Deserialize, Serialize};

/// Starting zoom and pan centre, also used when the view is reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ViewportConfig {
    /// Zoom level (valid range: -10.0 to 10.0). Lower is closer.
    pub initial_zoom: f32,
    pub initial_centre_x: f32,
    pub initial_centre_y: f32,
}
