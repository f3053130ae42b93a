pub mod errors;
pub mod types;

pub use errors::{ConfigError, GlyphgridError};
pub use types::{Color, SurfaceSize, Vec2};

pub type Result<T> = std::result::Result<T, GlyphgridError>;
