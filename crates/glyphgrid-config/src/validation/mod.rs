//! Configuration validation.
//!
//! Every section check appends to one error list, so a single
//! `ConfigError::ValidationError` reports all problems at once.

mod colors;
mod helpers;
mod ranges;


use crate::schema::GlyphgridConfig;
use glyphgrid_common::ConfigError;

type SectionCheck = fn(&mut Vec<String>, &GlyphgridConfig);

const SECTION_CHECKS: &[SectionCheck] = &[
    ranges::validate_window,
    ranges::validate_buffer,
    ranges::validate_viewport,
    ranges::validate_input,
    colors::validate_colors,
];

pub fn validate(config: &GlyphgridConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    for check in SECTION_CHECKS {
        check(&mut errors, config);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
