//! Frame submission and redraw requests.

use super::core::GlyphgridApp;

impl GlyphgridApp {
    /// Draw the glyph buffer through the current viewport.
    pub(super) fn render_frame(&mut self) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };
        if let Err(e) = rs.render_frame(&self.glyphs, &self.viewport) {
            tracing::error!("Render error: {e}");
            if e.is_setup_failure() {
                self.should_exit = true;
            }
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
