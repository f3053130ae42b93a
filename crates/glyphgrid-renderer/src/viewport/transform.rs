use glyphgrid_common::{SurfaceSize, Vec2};
use glyphgrid_config::schema::ViewportConfig;
use tracing::debug;

use super::rect::{compute_rect, ViewRect};

pub const MIN_ZOOM: f32 = -10.0;
pub const MAX_ZOOM: f32 = 10.0;

/// Zoom rate at a given zoom level. Rises as the view zooms out, which
/// gives scrolling a roughly logarithmic feel.
pub fn zoom_speed(zoom: f32) -> f32 {
    ((zoom + 10.0) / 20.0) * 3.0 + 0.1
}

/// Zoom level and pan centre of the single viewport.
///
/// The visible rectangle is never cached; [`ViewportTransform::rect`]
/// derives it from the current state on every call.
///
/// Drags are fed in as incremental pixel deltas. Uncommitted deltas
/// accumulate into a transient offset that is shown but not stored in the
/// centre; a commit folds the transient offset into the centre.
#[derive(Debug, Clone)]
pub struct ViewportTransform {
    zoom: f32,
    centre: Vec2,
    transient: Vec2,
    surface: SurfaceSize,
    initial_zoom: f32,
    initial_centre: Vec2,
}

impl ViewportTransform {
    /// A non-finite zoom starts at 0; a non-finite centre component at 0.
    pub fn new(surface: SurfaceSize, zoom: f32, centre: Vec2) -> Self {
        let zoom = finite_or_zero(zoom).clamp(MIN_ZOOM, MAX_ZOOM);
        let centre = Vec2::new(finite_or_zero(centre.x), finite_or_zero(centre.y));
        Self {
            zoom,
            centre,
            transient: Vec2::ZERO,
            surface,
            initial_zoom: zoom,
            initial_centre: centre,
        }
    }

    pub fn from_config(config: &ViewportConfig, surface: SurfaceSize) -> Self {
        Self::new(
            surface,
            config.initial_zoom,
            Vec2::new(config.initial_centre_x, config.initial_centre_y),
        )
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Committed pan centre.
    pub fn centre(&self) -> Vec2 {
        self.centre
    }

    /// Uncommitted drag offset in world units.
    pub fn transient_offset(&self) -> Vec2 {
        self.transient
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    pub fn set_surface_size(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    /// Currently displayed world rectangle.
    pub fn rect(&self) -> ViewRect {
        compute_rect(self.surface, self.zoom, self.centre + self.transient)
    }

    pub fn apply_zoom_delta(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        let speed = zoom_speed(self.zoom);
        self.zoom = (self.zoom + delta * speed).clamp(MIN_ZOOM, MAX_ZOOM);
        debug!(zoom = self.zoom, delta, "zoom updated");
    }

    /// Pan by a screen-pixel delta.
    ///
    /// The delta is converted to world units at the current zoom. With
    /// `commit == false` it is added to the transient offset only; with
    /// `commit == true` the transient offset plus this delta move the
    /// centre permanently and the transient offset is reset.
    ///
    /// Deltas are incremental, not absolute drag offsets: `pan(d, false)`
    /// then `pan(d, true)` moves the centre by `2d`. Callers that track an
    /// absolute drag should commit with a zero delta.
    pub fn apply_pan_delta(&mut self, pixel_delta: Vec2, commit: bool) {
        if !pixel_delta.x.is_finite() || !pixel_delta.y.is_finite() {
            return;
        }
        let scale = self.rect().width() / self.surface.safe_width();
        let world_delta = pixel_delta * scale;

        if commit {
            self.centre += self.transient + world_delta;
            self.transient = Vec2::ZERO;
            debug!(x = self.centre.x, y = self.centre.y, "pan committed");
        } else {
            self.transient += world_delta;
        }
    }

    /// Drop an uncommitted drag without moving the centre.
    pub fn cancel_pan(&mut self) {
        self.transient = Vec2::ZERO;
    }

    /// Return to the zoom and centre the transform was created with.
    pub fn reset(&mut self) {
        self.zoom = self.initial_zoom;
        self.centre = self.initial_centre;
        self.transient = Vec2::ZERO;
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ViewportTransform {
        ViewportTransform::new(SurfaceSize::new(100, 100), -10.0, Vec2::ZERO)
    }

    #[test]
    fn new_clamps_zoom() {
        let t = ViewportTransform::new(SurfaceSize::new(10, 10), 25.0, Vec2::ZERO);
        assert_eq!(t.zoom(), MAX_ZOOM);
        let t = ViewportTransform::new(SurfaceSize::new(10, 10), -25.0, Vec2::ZERO);
        assert_eq!(t.zoom(), MIN_ZOOM);
    }

    #[test]
    fn from_config_uses_initial_values() {
        let config = ViewportConfig {
            initial_zoom: 3.0,
            initial_centre_x: 4.0,
            initial_centre_y: -5.0,
        };
        let t = ViewportTransform::from_config(&config, SurfaceSize::new(800, 600));
        assert_eq!(t.zoom(), 3.0);
        assert_eq!(t.centre(), Vec2::new(4.0, -5.0));
    }

    #[test]
    fn zoom_speed_scales_with_zoom() {
        assert!((zoom_speed(-10.0) - 0.1).abs() < 1e-6);
        assert!((zoom_speed(0.0) - 1.6).abs() < 1e-6);
        assert!((zoom_speed(10.0) - 3.1).abs() < 1e-6);
    }

    #[test]
    fn zoom_delta_is_scaled_by_speed() {
        let mut t = ViewportTransform::new(SurfaceSize::new(100, 100), 0.0, Vec2::ZERO);
        t.apply_zoom_delta(1.0);
        assert!((t.zoom() - 1.6).abs() < 1e-6);
    }

    #[test]
    fn zoom_never_leaves_bounds() {
        for start in [-10.0, -9.5, -3.0, 0.0, 4.2, 9.99, 10.0] {
            for delta in [-1e6, -50.0, -1.0, -0.01, 0.0, 0.01, 1.0, 50.0, 1e6] {
                let mut t = ViewportTransform::new(SurfaceSize::new(100, 100), start, Vec2::ZERO);
                t.apply_zoom_delta(delta);
                assert!(
                    (MIN_ZOOM..=MAX_ZOOM).contains(&t.zoom()),
                    "start {start} delta {delta} -> {}",
                    t.zoom()
                );
            }
        }
    }

    #[test]
    fn zoom_ignores_non_finite_delta() {
        let mut t = ViewportTransform::new(SurfaceSize::new(100, 100), 1.0, Vec2::ZERO);
        t.apply_zoom_delta(f32::NAN);
        t.apply_zoom_delta(f32::INFINITY);
        assert_eq!(t.zoom(), 1.0);
    }

    #[test]
    fn rect_tracks_zoom_immediately() {
        let mut t = square();
        let before = t.rect();
        t.apply_zoom_delta(5.0);
        assert!(t.rect().width() > before.width());
    }

    #[test]
    fn transient_pan_round_trip_restores_rect() {
        let mut t = ViewportTransform::new(SurfaceSize::new(640, 480), 1.5, Vec2::new(2.0, 3.0));
        let original = t.rect();
        let d = Vec2::new(37.0, -12.5);

        t.apply_pan_delta(d, false);
        assert_ne!(t.rect(), original);
        t.apply_pan_delta(Vec2::new(-d.x, -d.y), false);

        assert_eq!(t.rect(), original);
        assert_eq!(t.centre(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn transient_pan_leaves_centre_alone() {
        let mut t = square();
        t.apply_pan_delta(Vec2::new(50.0, 0.0), false);
        assert_eq!(t.centre(), Vec2::ZERO);
        // 10 world units across 100 px -> 0.1 per pixel
        assert!((t.transient_offset().x - 5.0).abs() < 1e-5);
        assert!((t.rect().min_x + 10.0).abs() < 1e-5);
    }

    #[test]
    fn commit_moves_centre_permanently() {
        let mut t = square();
        t.apply_pan_delta(Vec2::new(10.0, 0.0), true);
        assert!((t.centre().x - 1.0).abs() < 1e-5);
        assert_eq!(t.transient_offset(), Vec2::ZERO);

        // A later uncommitted drag is relative to the committed centre.
        t.apply_pan_delta(Vec2::new(20.0, 0.0), false);
        assert!((t.centre().x - 1.0).abs() < 1e-5);
        assert!((t.rect().min_x + 8.0).abs() < 1e-5);

        t.apply_pan_delta(Vec2::new(-20.0, 0.0), false);
        assert!((t.rect().min_x + 6.0).abs() < 1e-5);
    }

    #[test]
    fn commit_folds_in_transient_offset() {
        let mut t = square();
        t.apply_pan_delta(Vec2::new(10.0, 10.0), false);
        t.apply_pan_delta(Vec2::new(10.0, 10.0), false);
        t.apply_pan_delta(Vec2::ZERO, true);
        assert!((t.centre().x - 2.0).abs() < 1e-5);
        assert!((t.centre().y - 2.0).abs() < 1e-5);
        assert_eq!(t.transient_offset(), Vec2::ZERO);
    }

    #[test]
    fn pan_scale_follows_zoom() {
        let mut t = ViewportTransform::new(SurfaceSize::new(100, 100), 10.0, Vec2::ZERO);
        t.apply_pan_delta(Vec2::new(1.0, 0.0), true);
        // 1020 world units across 100 px
        assert!((t.centre().x - 10.2).abs() < 1e-4);
    }

    #[test]
    fn cancel_pan_drops_transient() {
        let mut t = square();
        let original = t.rect();
        t.apply_pan_delta(Vec2::new(30.0, 30.0), false);
        t.cancel_pan();
        assert_eq!(t.rect(), original);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut t = ViewportTransform::new(SurfaceSize::new(100, 100), 2.0, Vec2::new(1.0, 1.0));
        t.apply_zoom_delta(3.0);
        t.apply_pan_delta(Vec2::new(40.0, 0.0), true);
        t.apply_pan_delta(Vec2::new(5.0, 0.0), false);
        t.reset();
        assert_eq!(t.zoom(), 2.0);
        assert_eq!(t.centre(), Vec2::new(1.0, 1.0));
        assert_eq!(t.transient_offset(), Vec2::ZERO);
    }

    #[test]
    fn resize_changes_aspect() {
        let mut t = square();
        t.set_surface_size(SurfaceSize::new(200, 100));
        assert_eq!(t.rect().width(), 10.0);
        assert_eq!(t.rect().height(), 5.0);
    }

    #[test]
    fn nan_initial_zoom_starts_at_zero() {
        let mut t = ViewportTransform::new(SurfaceSize::new(100, 100), f32::NAN, Vec2::ZERO);
        assert_eq!(t.zoom(), 0.0);

        t.apply_zoom_delta(1.0);
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&t.zoom()));

        t.reset();
        assert_eq!(t.zoom(), 0.0);
        assert!(t.rect().width().is_finite());
    }

    #[test]
    fn infinite_initial_values_are_sanitised() {
        let t = ViewportTransform::new(
            SurfaceSize::new(100, 100),
            f32::INFINITY,
            Vec2::new(f32::NAN, f32::NEG_INFINITY),
        );
        assert_eq!(t.zoom(), 0.0);
        assert_eq!(t.centre(), Vec2::ZERO);
    }

    #[test]
    fn commit_adds_its_own_delta_to_the_transient() {
        let mut t = square();
        let d = Vec2::new(10.0, 0.0);
        let world = t.rect().width() / 100.0 * 10.0;

        t.apply_pan_delta(d, false);
        t.apply_pan_delta(d, true);
        assert!((t.centre().x - 2.0 * world).abs() < 1e-5);
        assert_eq!(t.transient_offset(), Vec2::ZERO);
    }
}
