use glyphgrid_common::{Color, Vec2};

use crate::atlas;

/// Size in bytes of one packed glyph record.
pub const GLYPH_RECORD_SIZE: usize = 20;

/// Byte offsets of each field inside a packed record.
pub(crate) const OFFSET_POSITION_X: usize = 0;
pub(crate) const OFFSET_POSITION_Y: usize = 4;
pub(crate) const OFFSET_SCALE: usize = 8;
pub(crate) const OFFSET_GLYPH_INDEX: usize = 12;
pub(crate) const OFFSET_COLOR: usize = 16;

/// One glyph instance as the vertex shader consumes it.
///
/// Packed layout, 20 bytes:
///
/// | offset | field         | encoding                              |
/// |--------|---------------|---------------------------------------|
/// | 0      | `position.x`  | f32, little-endian                    |
/// | 4      | `position.y`  | f32, little-endian                    |
/// | 8      | `scale`       | f32, little-endian                    |
/// | 12     | `glyph_index` | i32, little-endian                    |
/// | 16     | `color`       | bytes R, G, B, A (`0xRRGGBBAA` order) |
///
/// An all-zero record has `scale == 0.0` and draws as a zero-area quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRecord {
    /// World-space top-left corner of the glyph quad.
    pub position: Vec2,
    /// Uniform scale of the 6x12 base glyph.
    pub scale: f32,
    /// Code point of the glyph. Only the low 8 bits select an atlas cell.
    pub glyph_index: i32,
    pub color: Color,
}

impl GlyphRecord {
    pub fn new(position: Vec2, scale: f32, glyph: char, color: Color) -> Self {
        Self {
            position,
            scale,
            glyph_index: glyph as u32 as i32,
            color,
        }
    }

    pub fn to_bytes(&self) -> [u8; GLYPH_RECORD_SIZE] {
        let mut out = [0u8; GLYPH_RECORD_SIZE];
        out[OFFSET_POSITION_X..OFFSET_POSITION_X + 4]
            .copy_from_slice(&self.position.x.to_le_bytes());
        out[OFFSET_POSITION_Y..OFFSET_POSITION_Y + 4]
            .copy_from_slice(&self.position.y.to_le_bytes());
        out[OFFSET_SCALE..OFFSET_SCALE + 4].copy_from_slice(&self.scale.to_le_bytes());
        out[OFFSET_GLYPH_INDEX..OFFSET_GLYPH_INDEX + 4]
            .copy_from_slice(&self.glyph_index.to_le_bytes());
        out[OFFSET_COLOR..OFFSET_COLOR + 4].copy_from_slice(&self.color.to_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8; GLYPH_RECORD_SIZE]) -> Self {
        let word = |at: usize| [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]];
        let [r, g, b, a] = word(OFFSET_COLOR);
        Self {
            position: Vec2::new(
                f32::from_le_bytes(word(OFFSET_POSITION_X)),
                f32::from_le_bytes(word(OFFSET_POSITION_Y)),
            ),
            scale: f32::from_le_bytes(word(OFFSET_SCALE)),
            glyph_index: i32::from_le_bytes(word(OFFSET_GLYPH_INDEX)),
            color: Color::from_rgba(r, g, b, a),
        }
    }

    /// Atlas `(column, row)` this record samples from.
    pub fn atlas_cell(&self) -> (u32, u32) {
        atlas::cell_for_index(self.glyph_index)
    }
}
