//! Mouse input translation for the viewport.
//!
//! Turns raw winit wheel and cursor events into zoom deltas and
//! incremental pan deltas. The event handler feeds the results into the
//! `ViewportTransform`.

use winit::event::MouseScrollDelta;

use glyphgrid_common::Vec2;
use glyphgrid_config::schema::InputConfig;

// =============================================================================
// ZOOM
// =============================================================================

/// Convert a wheel event into a zoom delta.
///
/// Scrolling up (positive y) zooms in, which lowers the zoom level.
/// Horizontal scrolling is ignored.
pub fn wheel_zoom_delta(delta: MouseScrollDelta, input: &InputConfig) -> f32 {
    let raw = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * input.wheel_line_zoom,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32) * input.wheel_pixel_zoom,
    };
    if input.invert_zoom {
        -raw
    } else {
        raw
    }
}

// =============================================================================
// PAN DRAG
// =============================================================================

/// Active left-button drag.
#[derive(Debug, Clone, Copy)]
pub struct PanDrag {
    /// Cursor position at the last reported move.
    last: Vec2,
    /// Total pixel movement since the drag began.
    travelled: Vec2,
}

impl PanDrag {
    pub fn begin(cursor: Vec2) -> Self {
        Self {
            last: cursor,
            travelled: Vec2::ZERO,
        }
    }

    /// Record a cursor move and return the pixel delta since the last one.
    pub fn move_to(&mut self, cursor: Vec2) -> Vec2 {
        let delta = cursor - self.last;
        self.last = cursor;
        self.travelled += delta;
        delta
    }

    pub fn travelled(&self) -> Vec2 {
        self.travelled
    }
}

// =============================================================================
// TESTS
// =============================================================================
