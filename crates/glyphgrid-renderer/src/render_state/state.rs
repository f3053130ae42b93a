use std::sync::Arc;
use winit::window::Window;

use glyphgrid_common::SurfaceSize;

use crate::gpu::{GpuContext, RendererError};
use crate::text::{ProgramState, TextRenderer};

use super::settings::RenderSettings;

/// Core rendering state: GPU context plus the glyph renderer.
///
/// Holds no glyphs and no viewport of its own; both are borrowed for each
/// frame from whoever owns them.
pub struct RenderState {
    pub gpu: GpuContext,
    pub text: TextRenderer,
    pub settings: RenderSettings,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    ///
    /// `capacity` is the number of glyph slots drawn every frame and should
    /// match the glyph buffer that will be passed to `render_frame`.
    pub async fn new(
        window: Arc<Window>,
        capacity: usize,
        settings: RenderSettings,
        vsync: bool,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, vsync).await?;
        let text = TextRenderer::new(&gpu.device, &gpu.queue, gpu.format(), capacity).await?;

        Ok(Self {
            gpu,
            text,
            settings,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.gpu.size.into()
    }

    pub fn instance_count(&self) -> u32 {
        self.text.instance_count()
    }

    pub fn program_state(&self) -> &ProgramState {
        self.text.program_state()
    }
}
