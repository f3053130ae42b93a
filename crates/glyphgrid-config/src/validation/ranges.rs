//! Numeric bounds for window, buffer, viewport and input sections.

use std::ops::RangeInclusive;

use crate::schema::GlyphgridConfig;

use super::helpers::{check_finite, check_range};

pub(crate) const WINDOW_WIDTH: RangeInclusive<u32> = 200..=8192;
pub(crate) const WINDOW_HEIGHT: RangeInclusive<u32> = 150..=8192;
pub(crate) const MAX_GLYPHS: RangeInclusive<u32> = 1..=1_000_000;
pub(crate) const TEXT_SCALE: RangeInclusive<f32> = 0.1..=16.0;
pub(crate) const TAB_WIDTH: RangeInclusive<u32> = 1..=16;
pub(crate) const ZOOM: RangeInclusive<f32> = -10.0..=10.0;
pub(crate) const WHEEL_LINE_ZOOM: RangeInclusive<f32> = 0.01..=5.0;
pub(crate) const WHEEL_PIXEL_ZOOM: RangeInclusive<f32> = 0.0001..=1.0;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GlyphgridConfig) {
    check_range(errors, "window.width", config.window.width, WINDOW_WIDTH);
    check_range(errors, "window.height", config.window.height, WINDOW_HEIGHT);
}

pub(crate) fn validate_buffer(errors: &mut Vec<String>, config: &GlyphgridConfig) {
    let buffer = &config.buffer;
    check_range(errors, "buffer.max_glyphs", buffer.max_glyphs, MAX_GLYPHS);
    check_range(errors, "buffer.text_scale", buffer.text_scale, TEXT_SCALE);
    check_range(errors, "buffer.tab_width", buffer.tab_width, TAB_WIDTH);
}

pub(crate) fn validate_viewport(errors: &mut Vec<String>, config: &GlyphgridConfig) {
    let viewport = &config.viewport;
    check_range(errors, "viewport.initial_zoom", viewport.initial_zoom, ZOOM);
    check_finite(errors, "viewport.initial_centre_x", viewport.initial_centre_x);
    check_finite(errors, "viewport.initial_centre_y", viewport.initial_centre_y);
}

pub(crate) fn validate_input(errors: &mut Vec<String>, config: &GlyphgridConfig) {
    let input = &config.input;
    check_range(
        errors,
        "input.wheel_line_zoom",
        input.wheel_line_zoom,
        WHEEL_LINE_ZOOM,
    );
    check_range(
        errors,
        "input.wheel_pixel_zoom",
        input.wheel_pixel_zoom,
        WHEEL_PIXEL_ZOOM,
    );
}
