//! Fixed bitmap glyph atlas.
//!
//! The atlas is a 256x128 single-channel image split into a 32x8 grid of
//! 8x16 cells. Each cell holds one 6x12 glyph in its top-left corner; the
//! rest of the cell is empty so neighbouring glyphs never bleed into each
//! other under nearest sampling.

mod font;
mod texture;

pub use texture::AtlasTexture;

/// Drawn glyph size in texels (and in world units at scale 1).
pub const GLYPH_WIDTH: u32 = 6;
pub const GLYPH_HEIGHT: u32 = 12;

/// Spacing between glyph cells in the atlas.
pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

pub const ATLAS_COLUMNS: u32 = 32;
pub const ATLAS_ROWS: u32 = 8;
pub const ATLAS_WIDTH: u32 = ATLAS_COLUMNS * CELL_WIDTH;
pub const ATLAS_HEIGHT: u32 = ATLAS_ROWS * CELL_HEIGHT;
pub const GLYPH_COUNT: u32 = ATLAS_COLUMNS * ATLAS_ROWS;

/// Atlas `(column, row)` for a glyph index. Only the low 8 bits count,
/// so every `i32` maps to some cell.
pub fn cell_for_index(glyph_index: i32) -> (u32, u32) {
    let column = (glyph_index & 0x1F) as u32;
    let row = ((glyph_index >> 5) & 0x07) as u32;
    (column, row)
}

/// CPU-side copy of the atlas image, one byte per texel, row-major.
#[derive(Debug, Clone)]
pub struct AtlasBitmap {
    pixels: Vec<u8>,
}

impl AtlasBitmap {
    /// Rasterize the built-in 8x8 bitmap font into the atlas grid.
    ///
    /// Ordinal 0 is a solid block, 1..=127 are ASCII, 128..=159 are blank
    /// and 160..=255 are Latin-1.
    pub fn builtin() -> Self {
        let mut pixels = vec![0u8; (ATLAS_WIDTH * ATLAS_HEIGHT) as usize];

        for ordinal in 0..GLYPH_COUNT {
            let glyph = font::rasterize(ordinal as u8);
            let (column, row) = cell_for_index(ordinal as i32);
            let x0 = column * CELL_WIDTH;
            let y0 = row * CELL_HEIGHT;

            for (gy, line) in glyph.iter().enumerate() {
                let start = ((y0 + gy as u32) * ATLAS_WIDTH + x0) as usize;
                pixels[start..start + GLYPH_WIDTH as usize].copy_from_slice(line);
            }
        }

        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        ATLAS_WIDTH
    }

    pub fn height(&self) -> u32 {
        ATLAS_HEIGHT
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * ATLAS_WIDTH + x) as usize]
    }

    /// Texel `(x, y)` inside the cell of `glyph_index`.
    pub fn cell_pixel(&self, glyph_index: i32, x: u32, y: u32) -> u8 {
        let (column, row) = cell_for_index(glyph_index);
        self.pixel(column * CELL_WIDTH + x, row * CELL_HEIGHT + y)
    }

    /// Number of lit texels in a glyph's cell.
    pub fn coverage(&self, glyph_index: i32) -> usize {
        (0..CELL_HEIGHT)
            .flat_map(|y| (0..CELL_WIDTH).map(move |x| (x, y)))
            .filter(|&(x, y)| self.cell_pixel(glyph_index, x, y) != 0)
            .count()
    }
}
