pub mod atlas;
pub mod glyph_buffer;
pub mod gpu;
pub mod render_state;
pub mod text;
pub mod viewport;

pub use glyph_buffer::{GlyphInstanceBuffer, GlyphRecord, GLYPH_RECORD_SIZE};
pub use gpu::{GpuContext, RendererError};
pub use render_state::{RenderSettings, RenderState};
pub use text::{ProgramState, TextRenderer, TextUniforms};
pub use viewport::{compute_rect, ViewRect, ViewportTransform};
