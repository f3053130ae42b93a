//! Fixed-capacity glyph instance storage.
//!
//! Callers address glyph slots by index. The backing bytes are uploaded
//! verbatim to the GPU instance buffer every frame, so a slot that was never
//! written (or was cleared) stays all-zero and draws nothing.

mod record;

#[cfg(test)]
mod tests;

pub use record::{GlyphRecord, GLYPH_RECORD_SIZE};

use glyphgrid_common::{Color, Vec2};
use tracing::warn;

use crate::atlas::GLYPH_WIDTH;

/// Default number of glyph slots.
pub const DEFAULT_MAX_GLYPHS: usize = 10_000;

/// Packed array of [`GlyphRecord`]s with a capacity fixed at construction.
///
/// Writes past the end are dropped, logged and counted. The buffer never
/// grows and never panics on a bad index.
#[derive(Debug, Clone)]
pub struct GlyphInstanceBuffer {
    data: Vec<u8>,
    capacity: usize,
    dropped: u64,
}

impl GlyphInstanceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity * GLYPH_RECORD_SIZE],
            capacity,
            dropped: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total writes rejected for being out of range since creation.
    pub fn dropped_writes(&self) -> u64 {
        self.dropped
    }

    /// Store one glyph in slot `idx`.
    ///
    /// Returns `false` (and stores nothing) when `idx >= capacity`.
    pub fn write(
        &mut self,
        idx: usize,
        position: Vec2,
        scale: f32,
        glyph: char,
        color: Color,
    ) -> bool {
        self.write_record(idx, &GlyphRecord::new(position, scale, glyph, color))
    }

    pub fn write_record(&mut self, idx: usize, record: &GlyphRecord) -> bool {
        if self.store(idx, record) {
            return true;
        }
        warn!(
            idx,
            capacity = self.capacity,
            "glyph write out of range, dropped"
        );
        false
    }

    /// Lay `text` out on one line starting at slot `start_idx`.
    ///
    /// The pen advances `6 * scale` world units per character. Characters
    /// that land past the end of the buffer are dropped. Returns the number
    /// of glyphs stored.
    pub fn write_string(
        &mut self,
        start_idx: usize,
        position: Vec2,
        scale: f32,
        text: &str,
        color: Color,
    ) -> usize {
        let advance = GLYPH_WIDTH as f32 * scale;
        let mut stored = 0;
        let mut dropped = 0;

        for (i, ch) in text.chars().enumerate() {
            let pen = Vec2::new(position.x + i as f32 * advance, position.y);
            let record = GlyphRecord::new(pen, scale, ch, color);
            if self.store(start_idx.saturating_add(i), &record) {
                stored += 1;
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            warn!(
                start_idx,
                stored,
                dropped,
                capacity = self.capacity,
                "string ran past glyph buffer capacity, truncated"
            );
        }
        stored
    }

    /// Decode slot `idx`, or `None` when out of range.
    pub fn record(&self, idx: usize) -> Option<GlyphRecord> {
        let bytes = self.slot(idx)?;
        let mut packed = [0u8; GLYPH_RECORD_SIZE];
        packed.copy_from_slice(bytes);
        Some(GlyphRecord::from_bytes(&packed))
    }

    /// Zero every slot.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// The full backing region, `capacity * 20` bytes.
    pub fn snapshot_for_upload(&self) -> &[u8] {
        &self.data
    }

    fn slot(&self, idx: usize) -> Option<&[u8]> {
        if idx >= self.capacity {
            return None;
        }
        let start = idx * GLYPH_RECORD_SIZE;
        Some(&self.data[start..start + GLYPH_RECORD_SIZE])
    }

    fn store(&mut self, idx: usize, record: &GlyphRecord) -> bool {
        if idx >= self.capacity {
            self.dropped += 1;
            return false;
        }
        let start = idx * GLYPH_RECORD_SIZE;
        self.data[start..start + GLYPH_RECORD_SIZE].copy_from_slice(&record.to_bytes());
        true
    }
}

impl Default for GlyphInstanceBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GLYPHS)
    }
}
