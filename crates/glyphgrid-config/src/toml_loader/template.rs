//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# glyphgrid configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "glyphgrid"
# width = 1280           # 200-8192
# height = 800           # 150-8192
# vsync = true

[buffer]
# max_glyphs = 10000     # 1-1000000, every slot is drawn each frame
# text_scale = 1.0       # 0.1-16.0
# tab_width = 4          # 1-16

[viewport]
# initial_zoom = 0.0     # -10.0 (close) to 10.0 (far)
# initial_centre_x = 0.0
# initial_centre_y = 0.0

[colors]
# background = "#4d4d4d" # glyph cell background
# foreground = "#e0e0e0" # document text
# clear = "#000000"      # outside glyph cells

[input]
# wheel_line_zoom = 0.5  # 0.01-5.0
# wheel_pixel_zoom = 0.01
# invert_zoom = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
