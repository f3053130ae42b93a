//! Configuration schema types for glyphgrid.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod buffer;
mod colors;
mod input;
mod logging;
mod viewport;
mod window;

pub use buffer::*;
pub use colors::*;
pub use input::*;
pub use logging::*;
pub use viewport::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlyphgridConfig {
    pub window: WindowConfig,
    pub buffer: BufferConfig,
    pub viewport: ViewportConfig,
    pub colors: ColorConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
