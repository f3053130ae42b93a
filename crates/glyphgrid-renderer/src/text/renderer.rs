use wgpu::util::DeviceExt;

use crate::atlas::{AtlasBitmap, AtlasTexture};
use crate::glyph_buffer::{GlyphInstanceBuffer, GLYPH_RECORD_SIZE};
use crate::gpu::RendererError;

use super::program::{ProgramState, TextProgram};
use super::uniforms::TextUniforms;

/// Draws every slot of a glyph buffer as one instanced triangle strip.
pub struct TextRenderer {
    program: TextProgram,
    instance_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _atlas: AtlasTexture,
    capacity: u32,
}

impl TextRenderer {
    /// Upload the atlas, allocate `capacity` instance slots and build the
    /// shader program. Fails if the program does not link.
    pub async fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        capacity: usize,
    ) -> Result<Self, RendererError> {
        let capacity = capacity.clamp(1, u32::MAX as usize) as u32;

        let atlas = AtlasTexture::upload(device, queue, &AtlasBitmap::builtin());

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("text uniforms"),
            contents: bytemuck::bytes_of(&TextUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let instance_bytes = instance_buffer_size(capacity, device.limits().max_buffer_size)?;

        // New buffers are zero-filled, so unwritten slots are zero-area.
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("text instances"),
            size: instance_bytes,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("text bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("text bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&atlas.sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("text pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let mut program = TextProgram::new();
        program.build(device, &pipeline_layout, format).await?;

        tracing::info!(capacity, "text renderer ready");

        Ok(Self {
            program,
            instance_buffer,
            uniform_buffer,
            bind_group,
            _atlas: atlas,
            capacity,
        })
    }

    /// Number of instances drawn per frame. Always the full capacity,
    /// regardless of how many slots hold a glyph.
    pub fn instance_count(&self) -> u32 {
        self.capacity
    }

    pub fn program_state(&self) -> &ProgramState {
        self.program.state()
    }

    /// Upload the uniform block and the full glyph buffer snapshot.
    pub fn prepare(&self, queue: &wgpu::Queue, glyphs: &GlyphInstanceBuffer, uniforms: &TextUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let snapshot = glyphs.snapshot_for_upload();
        let limit = self.capacity as usize * GLYPH_RECORD_SIZE;
        if snapshot.len() > limit {
            tracing::warn!(
                buffer_capacity = glyphs.capacity(),
                renderer_capacity = self.capacity,
                "glyph buffer larger than renderer capacity, extra slots not drawn"
            );
        }
        let upload = &snapshot[..snapshot.len().min(limit)];
        if !upload.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, upload);
        }
    }

    /// Issue the instanced draw. Does nothing unless the program is linked.
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        let Some(pipeline) = self.program.pipeline() else {
            return;
        };

        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..4, 0..self.capacity);
    }
}

/// Byte size of the instance buffer for `capacity` slots, rejected when the
/// device cannot allocate a buffer that large.
fn instance_buffer_size(capacity: u32, max_buffer_size: u64) -> Result<u64, RendererError> {
    let size = capacity as u64 * GLYPH_RECORD_SIZE as u64;
    if size > max_buffer_size {
        return Err(RendererError::DeviceError(format!(
            "{capacity} glyph slots need a {size}-byte instance buffer, device limit is {max_buffer_size}"
        )));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_buffer_fits_limit() {
        assert_eq!(instance_buffer_size(10_000, 256 << 20).unwrap(), 200_000);
    }

    #[test]
    fn oversized_instance_buffer_is_setup_failure() {
        let err = instance_buffer_size(20_000_000, 256 << 20).unwrap_err();
        assert!(matches!(err, RendererError::DeviceError(_)));
        assert!(err.is_setup_failure());
        assert!(err.to_string().contains("20000000 glyph slots"));
    }
}
