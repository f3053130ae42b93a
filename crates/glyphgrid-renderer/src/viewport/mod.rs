//! World-to-clip mapping driven by zoom and pan gestures.

mod rect;
mod transform;

pub use rect::{compute_rect, ViewRect};
pub use transform::{zoom_speed, ViewportTransform, MAX_ZOOM, MIN_ZOOM};
