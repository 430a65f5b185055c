use phosphor_common::Color;
use phosphor_config::{colors::color_or, PhosphorConfig};

/// Soft light around the inner bezel edge.
pub const BEZEL_GLOW: Color = Color::from_rgba(0x00, 0xbb, 0xff, 255);
/// Outer 1px hairline.
pub const HAIRLINE_COLOR: Color = Color::from_rgba(255, 255, 255, 38);
/// Fill of the outermost margin band.
pub const MARGIN_BAND_COLOR: Color = Color::from_rgba(0x1a, 0x1a, 0x1a, 255);

const DEFAULT_BEZEL: Color = Color::from_rgba(0x2a, 0x25, 0x20, 255);

/// Uniform block of `border.wgsl`. All geometry in logical pixels,
/// origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct BorderUniforms {
    pub resolution: [f32; 2],
    pub gradient_center: [f32; 2],
    /// `[x, y, width, height]` of the opening the bezel surrounds.
    pub inner_rect: [f32; 4],
    pub bezel: [f32; 4],
    pub gradient_start: [f32; 4],
    pub gradient_end: [f32; 4],
    pub glow_color: [f32; 4],
    pub hairline_color: [f32; 4],
    pub band_color: [f32; 4],
    pub gradient_radius: f32,
    pub corner_radius: f32,
    pub _pad: [f32; 2],
}

impl BorderUniforms {
    pub fn from_config(config: &PhosphorConfig, width: f32, height: f32) -> Self {
        let margin = config.ui.border_margin as f32;
        let inner_w = (width - 2.0 * margin).max(0.0);
        let inner_h = (height - 2.0 * margin).max(0.0);
        let corner_radius = (config.ui.border_radius as f32).min(inner_w.min(inner_h) / 2.0);

        let gradient = &config.gradient;
        let base_radius = ((width / 2.0).powi(2) + (height / 2.0).powi(2)).sqrt();
        let offset = gradient.center_offset as f32;

        Self {
            resolution: [width, height],
            gradient_center: [width / 2.0 + offset, height / 2.0 + offset],
            inner_rect: [margin, margin, inner_w, inner_h],
            bezel: color_or(&config.crt.colors.bezel, DEFAULT_BEZEL).to_f32_array(),
            gradient_start: gradient.start_color.to_f32_array(),
            gradient_end: gradient.end_color.to_f32_array(),
            glow_color: BEZEL_GLOW.to_f32_array(),
            hairline_color: HAIRLINE_COLOR.to_f32_array(),
            band_color: MARGIN_BAND_COLOR.to_f32_array(),
            gradient_radius: (base_radius * gradient.radius_multiplier as f32).max(1.0),
            corner_radius: corner_radius.max(0.0),
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<BorderUniforms>(), 144);
        assert_eq!(std::mem::size_of::<BorderUniforms>() % 16, 0);
    }

    #[test]
    fn geometry_follows_margin_and_viewport() {
        let config = PhosphorConfig::default();
        let u = BorderUniforms::from_config(&config, 800.0, 600.0);
        assert_eq!(u.inner_rect, [25.0, 25.0, 750.0, 550.0]);
        assert_eq!(u.gradient_center, [400.0, 300.0]);
        assert!((u.gradient_radius - 500.0).abs() < 1e-3);
        assert!((u.corner_radius - 20.0).abs() < 1e-6);
    }

    #[test]
    fn gradient_tracks_config() {
        let mut config = PhosphorConfig::default();
        config.gradient.radius_multiplier = 0.5;
        config.gradient.center_offset = -40.0;
        config.crt.colors.bezel = "#ff0000".into();
        let u = BorderUniforms::from_config(&config, 800.0, 600.0);
        assert_eq!(u.gradient_center, [360.0, 260.0]);
        assert!((u.gradient_radius - 250.0).abs() < 1e-3);
        assert_eq!(u.bezel, [1.0, 0.0, 0.0, 1.0]);
        assert!((u.gradient_start[3] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn invalid_bezel_falls_back_and_radius_fits() {
        let mut config = PhosphorConfig::default();
        config.crt.colors.bezel = "brown".into();
        config.ui.border_radius = 50.0;
        let u = BorderUniforms::from_config(&config, 120.0, 100.0);
        assert_eq!(u.bezel, DEFAULT_BEZEL.to_f32_array());
        // inner 70x50 → radius capped at 25
        assert!((u.corner_radius - 25.0).abs() < 1e-6);
    }
}
