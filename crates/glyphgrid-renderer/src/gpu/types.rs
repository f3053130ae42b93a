use glyphgrid_common::{GlyphgridError, SurfaceSize};

/// Errors that can occur during GPU setup and rendering.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("pipeline link failed: {0}")]
    PipelineLink(String),
}

impl RendererError {
    /// Whether this error means the renderer could not be brought up at all.
    pub fn is_setup_failure(&self) -> bool {
        !matches!(self, RendererError::SurfaceError(_))
    }
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<RendererError> for GlyphgridError {
    fn from(e: RendererError) -> Self {
        GlyphgridError::Renderer(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl From<PhysicalSize> for SurfaceSize {
    fn from(size: PhysicalSize) -> Self {
        SurfaceSize::new(size.width, size.height)
    }
}
