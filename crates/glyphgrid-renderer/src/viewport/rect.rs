use glyphgrid_common::{SurfaceSize, Vec2};

/// World-space rectangle mapped onto the whole surface.
///
/// `min` is the top-left corner: world y grows downward on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl ViewRect {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// `[min_x, min_y, max_x, max_y]`, the layout of the `viewport` uniform.
    pub fn to_array(&self) -> [f32; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

/// Visible world rectangle for a surface, zoom level and pan centre.
///
/// Width runs linearly from 10 world units at zoom -10 up to
/// `surface.width * 10 + 20` at zoom 10; height keeps the surface aspect.
/// The centre is negated, so a larger `centre.x` moves content right.
pub fn compute_rect(surface: SurfaceSize, zoom: f32, centre: Vec2) -> ViewRect {
    let w = surface.width as f32;
    let width = ((zoom + 10.0) / 20.0) * (w * 10.0 + 10.0) + 10.0;
    let height = surface.aspect() * width;

    ViewRect {
        min_x: -centre.x - width / 2.0,
        min_y: -centre.y - height / 2.0,
        max_x: -centre.x + width / 2.0,
        max_y: -centre.y + height / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_rect_is_pure() {
        let s = SurfaceSize::new(640, 480);
        let c = Vec2::new(3.5, -1.25);
        assert_eq!(compute_rect(s, 2.5, c), compute_rect(s, 2.5, c));
    }

    #[test]
    fn nearest_zoom_is_ten_units_wide() {
        let r = compute_rect(SurfaceSize::new(1920, 1080), -10.0, Vec2::ZERO);
        assert_eq!(r.width(), 10.0);
    }

    #[test]
    fn farthest_zoom_width() {
        let r = compute_rect(SurfaceSize::new(100, 100), 10.0, Vec2::ZERO);
        assert_eq!(r.width(), 1020.0);
        assert_eq!(r.height(), 1020.0);
    }

    #[test]
    fn height_follows_aspect() {
        let r = compute_rect(SurfaceSize::new(200, 100), -10.0, Vec2::ZERO);
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 5.0);
    }

    #[test]
    fn centre_is_negated() {
        let r = compute_rect(SurfaceSize::new(100, 100), -10.0, Vec2::new(5.0, -2.0));
        assert_eq!(r.min_x, -10.0);
        assert_eq!(r.max_x, 0.0);
        assert_eq!(r.min_y, -3.0);
        assert_eq!(r.max_y, 7.0);
    }

    #[test]
    fn zero_width_surface_stays_finite() {
        let r = compute_rect(SurfaceSize::new(0, 600), 0.0, Vec2::ZERO);
        assert!(r.width().is_finite());
        assert!(r.height().is_finite());
    }

    #[test]
    fn to_array_order() {
        let r = ViewRect {
            min_x: 1.0,
            min_y: 2.0,
            max_x: 3.0,
            max_y: 4.0,
        };
        assert_eq!(r.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }
}
