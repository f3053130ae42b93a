//! Frame orchestration: owns the GPU context and text renderer and turns
//! a glyph buffer plus viewport into one presented frame.

mod frame;
mod helpers;
mod settings;
mod state;

pub use settings::RenderSettings;
pub use state::RenderState;
