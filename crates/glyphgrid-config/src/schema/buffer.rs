//! Glyph buffer sizing.

use serde::{Deserialize, Serialize};

/// Glyph instance buffer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Number of glyph slots allocated at startup (valid range: 1-1000000).
    /// Every slot is drawn each frame, used or not.
    pub max_glyphs: u32,
    /// Scale applied to the 6x12 base glyph when laying out documents
    /// (valid range: 0.1-16.0).
    pub text_scale: f32,
    /// Spaces per tab when laying out documents (valid range: 1-16).
    pub tab_width: u32,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            max_glyphs: 10_000,
            text_scale: 1.0,
            tab_width: 4,
        }
    }
}
