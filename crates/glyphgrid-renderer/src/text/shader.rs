/// Instanced glyph shader.
///
/// Each instance is one glyph record; the vertex index picks the quad
/// corner, drawn as a 4-vertex triangle strip.
pub(crate) const SHADER_SOURCE: &str = r#"
const GLYPH_SIZE: vec2<f32> = vec2<f32>(6.0, 12.0);
const ATLAS_STRIDE: vec2<f32> = vec2<f32>(8.0, 16.0);
const ATLAS_SIZE: vec2<f32> = vec2<f32>(256.0, 128.0);

struct TextUniforms {
    viewport: vec4<f32>,
    origin: vec4<f32>,
    bg_col: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: TextUniforms;
@group(0) @binding(1)
var font_tex: texture_2d<f32>;
@group(0) @binding(2)
var font_sampler: sampler;

struct GlyphInput {
    // xy = world position, z = scale
    @location(0) pos: vec3<f32>,
    @location(1) glyph_idx: i32,
    @location(2) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tc: vec2<f32>,
    @location(1) fg_col: vec4<f32>,
};

fn remap(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    let t = (x - a1) / (a2 - a1);
    return t * (b2 - b1) + b1;
}

@vertex
fn vs_main(@builtin(vertex_index) vid: u32, glyph: GlyphInput) -> VertexOutput {
    let corner = vec2<f32>(f32(vid & 1u), f32((vid >> 1u) & 1u));

    let cell = vec2<f32>(
        f32(glyph.glyph_idx & 0x1f),
        f32((glyph.glyph_idx >> 5u) & 0x07),
    );
    let texel = cell * ATLAS_STRIDE + corner * GLYPH_SIZE;

    let quad = glyph.pos.xy + corner * GLYPH_SIZE * glyph.pos.z + uniforms.origin.xy;
    let vp = uniforms.viewport;

    var out: VertexOutput;
    out.clip_position = vec4<f32>(
        remap(quad.x, vp.x, vp.z, -1.0, 1.0),
        remap(quad.y, vp.y, vp.w, 1.0, -1.0),
        0.0,
        1.0,
    );
    out.tc = texel / ATLAS_SIZE;
    out.fg_col = glyph.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let coverage = textureSample(font_tex, font_sampler, in.tc).r;
    return mix(uniforms.bg_col, in.fg_col, coverage);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::{ATLAS_HEIGHT, ATLAS_WIDTH, CELL_HEIGHT, CELL_WIDTH, GLYPH_HEIGHT, GLYPH_WIDTH};

    fn vec2_const(x: u32, y: u32) -> String {
        format!("vec2<f32>({x}.0, {y}.0)")
    }

    #[test]
    fn shader_constants_match_atlas() {
        assert!(SHADER_SOURCE.contains(&format!(
            "GLYPH_SIZE: vec2<f32> = {}",
            vec2_const(GLYPH_WIDTH, GLYPH_HEIGHT)
        )));
        assert!(SHADER_SOURCE.contains(&format!(
            "ATLAS_STRIDE: vec2<f32> = {}",
            vec2_const(CELL_WIDTH, CELL_HEIGHT)
        )));
        assert!(SHADER_SOURCE.contains(&format!(
            "ATLAS_SIZE: vec2<f32> = {}",
            vec2_const(ATLAS_WIDTH, ATLAS_HEIGHT)
        )));
    }

    #[test]
    fn shader_has_entry_points() {
        assert!(SHADER_SOURCE.contains("fn vs_main("));
        assert!(SHADER_SOURCE.contains("fn fs_main("));
    }

    #[test]
    fn shader_cell_masks_match_packing() {
        assert!(SHADER_SOURCE.contains("glyph.glyph_idx & 0x1f"));
        assert!(SHADER_SOURCE.contains("(glyph.glyph_idx >> 5u) & 0x07"));
    }
}
