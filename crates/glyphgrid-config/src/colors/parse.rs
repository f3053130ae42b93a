use glyphgrid_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// `rgb(r,g,b)` or `rgba(r,g,b,a)`; alpha is optional in either spelling.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

pub(super) fn parse_hex(s: &str) -> Option<Color> {
    let digits = HEX_RE.captures(s)?.get(1)?.as_str();
    if digits.len() == 3 {
        // #abc is shorthand for #aabbcc
        let long: String = digits.chars().flat_map(|c| [c, c]).collect();
        return Color::from_hex(&long);
    }
    Color::from_hex(digits)
}

pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let channel = |i: usize| caps[i].parse::<u8>().ok();
    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);

    let a = match caps.get(4).map(|m| m.as_str()) {
        None => 255,
        Some(frac) if frac.contains('.') => {
            let frac: f64 = frac.parse().ok()?;
            if !(0.0..=1.0).contains(&frac) {
                return None;
            }
            (frac * 255.0).round() as u8
        }
        Some(int) => int.parse::<u8>().ok()?,
    };

    Some(Color::from_rgba(r, g, b, a))
}
