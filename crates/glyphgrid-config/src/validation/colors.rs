use crate::colors::validate_color;
use crate::schema::GlyphgridConfig;

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &GlyphgridConfig) {
    let fields = [
        ("colors.background", &config.colors.background),
        ("colors.foreground", &config.colors.foreground),
        ("colors.clear", &config.colors.clear),
    ];
    for (name, value) in fields {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
}
