//! Shader program lifecycle.
//!
//! `Uncompiled -> Compiling -> Linked | Failed`. Compilation is the WGSL
//! module, linking is render pipeline creation; both run inside a wgpu
//! validation error scope so a bad shader surfaces as an error instead of
//! the device's uncaptured-error panic.

use crate::gpu::RendererError;
use crate::glyph_buffer::GLYPH_RECORD_SIZE;

use super::shader::SHADER_SOURCE;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProgramState {
    #[default]
    Uncompiled,
    Compiling,
    Linked,
    /// Terminal. Holds the compiler or linker message.
    Failed(String),
}

impl ProgramState {
    /// `Uncompiled -> Compiling`. Returns `false` from any other state.
    pub fn begin(&mut self) -> bool {
        if *self == ProgramState::Uncompiled {
            *self = ProgramState::Compiling;
            true
        } else {
            false
        }
    }

    /// `Compiling -> Linked`.
    pub fn link(&mut self) -> bool {
        if *self == ProgramState::Compiling {
            *self = ProgramState::Linked;
            true
        } else {
            false
        }
    }

    /// `Compiling -> Failed`.
    pub fn fail(&mut self, reason: impl Into<String>) -> bool {
        if *self == ProgramState::Compiling {
            *self = ProgramState::Failed(reason.into());
            true
        } else {
            false
        }
    }

    /// Binding and drawing are only valid once linked.
    pub fn is_linked(&self) -> bool {
        matches!(self, ProgramState::Linked)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProgramState::Failed(_))
    }
}

/// The glyph render pipeline together with its lifecycle state.
pub(crate) struct TextProgram {
    state: ProgramState,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl TextProgram {
    pub(crate) fn new() -> Self {
        Self {
            state: ProgramState::Uncompiled,
            pipeline: None,
        }
    }

    pub(crate) fn state(&self) -> &ProgramState {
        &self.state
    }

    /// The pipeline, only when linked.
    pub(crate) fn pipeline(&self) -> Option<&wgpu::RenderPipeline> {
        if self.state.is_linked() {
            self.pipeline.as_ref()
        } else {
            None
        }
    }

    /// Compile the shader and link the pipeline.
    ///
    /// A program that already failed keeps failing; a linked one is left as is.
    pub(crate) async fn build(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
    ) -> Result<(), RendererError> {
        match &self.state {
            ProgramState::Linked => return Ok(()),
            ProgramState::Failed(reason) => {
                return Err(RendererError::ShaderCompile(reason.clone()));
            }
            _ => {}
        }
        self.state.begin();

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("text shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });
        if let Some(err) = device.pop_error_scope().await {
            let reason = err.to_string();
            tracing::error!("text shader failed to compile: {reason}");
            self.state.fail(reason.clone());
            return Err(RendererError::ShaderCompile(reason));
        }

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = create_pipeline(device, layout, format, &shader);
        if let Some(err) = device.pop_error_scope().await {
            let reason = err.to_string();
            tracing::error!("text pipeline failed to link: {reason}");
            self.state.fail(reason.clone());
            return Err(RendererError::PipelineLink(reason));
        }

        self.pipeline = Some(pipeline);
        self.state.link();
        tracing::debug!("text program linked");
        Ok(())
    }
}

/// Per-instance layout of a packed glyph record.
pub(crate) const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
    // pos.xy + scale
    wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x3,
    },
    // glyph index
    wgpu::VertexAttribute {
        offset: 12,
        shader_location: 1,
        format: wgpu::VertexFormat::Sint32,
    },
    // rgba bytes
    wgpu::VertexAttribute {
        offset: 16,
        shader_location: 2,
        format: wgpu::VertexFormat::Unorm8x4,
    },
];

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    shader: &wgpu::ShaderModule,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("text pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: GLYPH_RECORD_SIZE as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            }],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
