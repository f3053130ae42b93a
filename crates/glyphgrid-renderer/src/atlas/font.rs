use font8x8::legacy::{BASIC_LEGACY, LATIN_LEGACY};

use super::{GLYPH_HEIGHT, GLYPH_WIDTH};

const W: usize = GLYPH_WIDTH as usize;
const H: usize = GLYPH_HEIGHT as usize;

/// Rows of padding above the 8-row source glyph inside the 12-row cell.
const TOP_PAD: usize = 2;

const LIT: u8 = 255;

/// 8x8 source rows for an atlas ordinal; bit 0 is the leftmost pixel.
fn source_rows(ordinal: u8) -> [u8; 8] {
    match ordinal {
        0..=127 => BASIC_LEGACY[ordinal as usize],
        160..=255 => LATIN_LEGACY[ordinal as usize - 160],
        _ => [0; 8],
    }
}

/// Rasterize one glyph into a 6x12 coverage block.
///
/// Ordinal 0 is a solid block. Source column 6 is folded into column 5 so
/// the 7-pixel-wide font fits the 6-pixel cell; column 7 is always empty in
/// the source.
pub(super) fn rasterize(ordinal: u8) -> [[u8; W]; H] {
    if ordinal == 0 {
        return [[LIT; W]; H];
    }

    let mut out = [[0u8; W]; H];
    for (sy, bits) in source_rows(ordinal).iter().enumerate() {
        let line = &mut out[TOP_PAD + sy];
        for (x, texel) in line.iter_mut().enumerate() {
            let mut lit = bits & (1 << x) != 0;
            if x == W - 1 {
                lit |= bits & (1 << (x + 1)) != 0;
            }
            if lit {
                *texel = LIT;
            }
        }
    }
    out
}
