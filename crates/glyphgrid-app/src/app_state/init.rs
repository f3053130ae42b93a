//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use glyphgrid_renderer::{RenderSettings, RenderState};

use super::core::GlyphgridApp;

impl GlyphgridApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(format!("{} - {}", window_config.title, self.document.title()))
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let settings = RenderSettings::from_config(&self.config);
        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            self.glyphs.capacity(),
            settings,
            window_config.vsync,
        ));

        match render_state {
            Ok(rs) => {
                self.viewport.set_surface_size(rs.surface_size());
                tracing::info!(
                    "Renderer ready: {} glyph slots per frame, program {:?}",
                    rs.instance_count(),
                    rs.program_state()
                );
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        self.needs_redraw = true;
        true
    }
}
