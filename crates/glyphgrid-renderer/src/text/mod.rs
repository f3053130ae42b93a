//! Instanced glyph rendering: WGSL program, uniform block and draw.

mod program;
mod renderer;
mod shader;
mod uniforms;

pub use program::ProgramState;
pub use renderer::TextRenderer;
pub use uniforms::TextUniforms;
