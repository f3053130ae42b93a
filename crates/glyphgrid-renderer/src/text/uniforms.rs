use glyphgrid_common::{Color, Vec2};

use crate::viewport::ViewRect;

/// Uniform block shared by both shader stages, 3 x vec4 = 48 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextUniforms {
    /// Visible world rect: `[min_x, min_y, max_x, max_y]`.
    pub viewport: [f32; 4],
    /// World offset added to every glyph; `zw` are unused and kept at 1.
    pub origin: [f32; 4],
    /// Cell background blended under each glyph.
    pub bg_col: [f32; 4],
}

impl TextUniforms {
    pub fn new(rect: ViewRect, origin: Vec2, background: Color) -> Self {
        Self {
            viewport: rect.to_array(),
            origin: [origin.x, origin.y, 1.0, 1.0],
            bg_col: background.to_f32(),
        }
    }
}

impl Default for TextUniforms {
    fn default() -> Self {
        Self {
            viewport: [-1.0, -1.0, 1.0, 1.0],
            origin: [0.0, 0.0, 1.0, 1.0],
            bg_col: [0.3, 0.3, 0.3, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size() {
        assert_eq!(std::mem::size_of::<TextUniforms>(), 48);
    }

    #[test]
    fn default_uniforms_have_usable_viewport() {
        let u = TextUniforms::default();
        assert!(u.viewport[2] > u.viewport[0]);
        assert!(u.viewport[3] > u.viewport[1]);
        assert_eq!(u.origin, [0.0, 0.0, 1.0, 1.0]);
        assert!((u.bg_col[0] - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn uniforms_layout() {
        let rect = ViewRect {
            min_x: -1.0,
            min_y: -2.0,
            max_x: 3.0,
            max_y: 4.0,
        };
        let u = TextUniforms::new(rect, Vec2::ZERO, Color::from_rgba(255, 0, 0, 255));
        let floats: &[f32; 12] = bytemuck::cast_ref(&u);
        assert_eq!(&floats[0..4], &[-1.0, -2.0, 3.0, 4.0]);
        assert_eq!(&floats[4..8], &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(&floats[8..12], &[1.0, 0.0, 0.0, 1.0]);
    }
}
