//! What the window shows, and how it is laid out into glyph slots.
//!
//! The glyph buffer has no notion of lines. Each line is placed here
//! explicitly: line `n` starts at `y = n * 12 * scale` and is written with
//! one `write_string` call. Slots are filled in reading order.

use std::path::{Path, PathBuf};

use glyphgrid_common::{Color, GlyphgridError, Vec2};
use glyphgrid_config::{parse_color, GlyphgridConfig};
use glyphgrid_renderer::atlas::{ATLAS_COLUMNS, GLYPH_COUNT, GLYPH_HEIGHT};
use glyphgrid_renderer::GlyphInstanceBuffer;

/// Fallback glyph colour when the configured one does not parse.
const DEFAULT_FOREGROUND: Color = Color::from_rgba(0xe0, 0xe0, 0xe0, 255);

// =============================================================================
// TYPES
// =============================================================================

/// The text being displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Contents of a file given on the command line.
    Text { path: PathBuf, text: String },
    /// Built-in character table plus usage notes.
    Sample,
}

/// Placement parameters shared by every line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyle {
    pub origin: Vec2,
    pub scale: f32,
    pub color: Color,
    pub tab_width: usize,
}

/// Outcome of laying a document into a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub lines: usize,
    pub stored: usize,
    pub dropped: usize,
}

impl LayoutStyle {
    pub fn from_config(config: &GlyphgridConfig) -> Self {
        let color = match parse_color(&config.colors.foreground) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("{e}, using {}", DEFAULT_FOREGROUND.to_hex());
                DEFAULT_FOREGROUND
            }
        };
        Self {
            origin: Vec2::ZERO,
            scale: config.buffer.text_scale,
            color,
            tab_width: config.buffer.tab_width as usize,
        }
    }

    fn line_height(&self) -> f32 {
        GLYPH_HEIGHT as f32 * self.scale
    }
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
            color: DEFAULT_FOREGROUND,
            tab_width: 4,
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl Document {
    /// Read a local text file. Invalid UTF-8 is replaced rather than
    /// rejected.
    pub fn load(path: &Path) -> Result<Self, GlyphgridError> {
        let bytes = std::fs::read(path)
            .map_err(|e| GlyphgridError::Document(format!("{}: {e}", path.display())))?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "{} is not valid UTF-8, replacing invalid sequences",
                    path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        Ok(Self::Text {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Short name for the window title.
    pub fn title(&self) -> String {
        match self {
            Self::Text { path, .. } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Sample => "sample".to_string(),
        }
    }

    /// Lay the document out from slot 0. The caller clears the buffer.
    pub fn layout(&self, buffer: &mut GlyphInstanceBuffer, style: &LayoutStyle) -> LayoutReport {
        let report = match self {
            Self::Text { text, .. } => layout_text(buffer, text, style),
            Self::Sample => layout_sample(buffer, style),
        };

        if report.dropped > 0 {
            tracing::warn!(
                stored = report.stored,
                dropped = report.dropped,
                capacity = buffer.capacity(),
                "document does not fit in the glyph buffer"
            );
        }
        report
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Writes successive lines into consecutive slots.
struct LineWriter<'a> {
    buffer: &'a mut GlyphInstanceBuffer,
    style: &'a LayoutStyle,
    next_idx: usize,
    report: LayoutReport,
}

impl<'a> LineWriter<'a> {
    fn new(buffer: &'a mut GlyphInstanceBuffer, style: &'a LayoutStyle) -> Self {
        Self {
            buffer,
            style,
            next_idx: 0,
            report: LayoutReport::default(),
        }
    }

    /// Write `line` verbatim; every char becomes one glyph.
    fn put_line(&mut self, line: &str) {
        let y = self.style.origin.y + self.report.lines as f32 * self.style.line_height();
        self.report.lines += 1;

        let len = line.chars().count();
        if len == 0 {
            return;
        }

        // Once full, skip the write so the buffer does not warn per line.
        let stored = if self.next_idx < self.buffer.capacity() {
            self.buffer.write_string(
                self.next_idx,
                Vec2::new(self.style.origin.x, y),
                self.style.scale,
                line,
                self.style.color,
            )
        } else {
            0
        };

        self.next_idx += len;
        self.report.stored += stored;
        self.report.dropped += len - stored;
    }

    fn finish(self) -> LayoutReport {
        self.report
    }
}

/// Lay out plain text, one line per `\n`, with tabs expanded.
pub fn layout_text(
    buffer: &mut GlyphInstanceBuffer,
    text: &str,
    style: &LayoutStyle,
) -> LayoutReport {
    let mut writer = LineWriter::new(buffer, style);
    for line in text.lines() {
        writer.put_line(&expand_tabs(line, style.tab_width));
    }
    writer.finish()
}

/// Replace each tab with `tab_width` spaces and drop stray carriage
/// returns.
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '\t' => out.extend(std::iter::repeat(' ').take(tab_width)),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

// =============================================================================
// SAMPLE
// =============================================================================

const SAMPLE_HEADER: &[&str] = &[
    "glyphgrid",
    "",
    "Every atlas cell, 32 per row. Cell 0 is the solid block.",
    "",
];

const SAMPLE_FOOTER: &[&str] = &[
    "",
    "Scroll to zoom. Drag with the left button to pan.",
    "Home or 0 resets the view. Escape quits.",
    "",
    "Pass a file path to view a text file instead:",
    "\tglyphgrid notes.txt",
];

/// One row of the character table: cells `row * 32 .. row * 32 + 32`.
///
/// Control characters are kept as-is; they index their own atlas cells.
pub fn char_table_row(row: usize) -> String {
    let start = row * ATLAS_COLUMNS as usize;
    (start..start + ATLAS_COLUMNS as usize)
        .filter_map(|i| char::from_u32(i as u32))
        .collect()
}

fn layout_sample(buffer: &mut GlyphInstanceBuffer, style: &LayoutStyle) -> LayoutReport {
    let rows = GLYPH_COUNT as usize / ATLAS_COLUMNS as usize;
    let mut writer = LineWriter::new(buffer, style);

    for line in SAMPLE_HEADER {
        writer.put_line(line);
    }
    for row in 0..rows {
        writer.put_line(&char_table_row(row));
    }
    for line in SAMPLE_FOOTER {
        writer.put_line(&expand_tabs(line, style.tab_width));
    }
    writer.finish()
}

// =============================================================================
// TESTS
// =============================================================================
