//! GlyphgridApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use glyphgrid_common::{SurfaceSize, Vec2};
use glyphgrid_config::GlyphgridConfig;
use glyphgrid_renderer::{GlyphInstanceBuffer, RenderState, ViewportTransform};

use crate::document::{Document, LayoutStyle};
use crate::input::PanDrag;

/// Top-level application state.
pub struct GlyphgridApp {
    pub(super) config: GlyphgridConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Scene
    pub(super) document: Document,
    pub(super) glyphs: GlyphInstanceBuffer,
    pub(super) viewport: ViewportTransform,

    // Mouse
    pub(super) cursor: Vec2,
    pub(super) drag: Option<PanDrag>,

    pub(super) needs_redraw: bool,
    pub(super) should_exit: bool,
}

impl GlyphgridApp {
    /// Build the app and lay the document out. The window and GPU come up
    /// later, in `resumed`.
    pub fn new(config: GlyphgridConfig, document: Document) -> Self {
        let mut glyphs = GlyphInstanceBuffer::new(config.buffer.max_glyphs as usize);
        let style = LayoutStyle::from_config(&config);
        let report = document.layout(&mut glyphs, &style);
        tracing::info!(
            "Document '{}' laid out: {} lines, {} glyphs ({} slots)",
            document.title(),
            report.lines,
            report.stored,
            glyphs.capacity()
        );

        // Replaced by the real surface size once the window exists.
        let surface = SurfaceSize::new(config.window.width, config.window.height);
        let viewport = ViewportTransform::from_config(&config.viewport, surface);

        Self {
            config,
            window: None,
            render_state: None,
            document,
            glyphs,
            viewport,
            cursor: Vec2::ZERO,
            drag: None,
            needs_redraw: true,
            should_exit: false,
        }
    }
}
