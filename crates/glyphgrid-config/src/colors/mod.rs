//! Colour strings as they appear in `config.toml`.
//!
//! Accepted forms: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` and
//! `rgba(r, g, b, a)`, where `a` is either 0-255 or a 0.0-1.0 fraction.

mod parse;


use glyphgrid_common::types::Color;
use glyphgrid_common::ConfigError;

/// Which notation a colour string claims to use, judged by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Hex,
    Functional,
}

fn notation(s: &str) -> Option<Notation> {
    if s.starts_with('#') {
        Some(Notation::Hex)
    } else if s.starts_with("rgb(") || s.starts_with("rgba(") {
        Some(Notation::Functional)
    } else {
        None
    }
}

pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    match notation(s) {
        Some(Notation::Hex) => parse::parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}"))),
        Some(Notation::Functional) => parse::parse_rgb(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}"))),
        None => Err(ConfigError::ParseError(format!(
            "unrecognized color format: {s}"
        ))),
    }
}

/// Whether `s` parses as a colour.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
