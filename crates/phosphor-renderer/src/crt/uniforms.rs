use std::mem::offset_of;

use phosphor_common::Color;
use phosphor_config::{colors::color_or, PhosphorConfig};

use super::CONTENT_OVERLAY_OPACITY;
use crate::layout::LayoutSnapshot;
use crate::textures::OVERLAY_TILE_WIDTH;

/// Which of the two composited surfaces a material shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Content,
    Border,
}

/// Uniform block of `crt.wgsl`.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct CrtUniforms {
    /// NDC placement `[left, bottom, width, height]`.
    pub rect: [f32; 4],
    pub virtual_resolution: [f32; 2],
    pub overlay_repeat: [f32; 2],
    pub font_color: [f32; 4],
    pub background_color: [f32; 4],
    /// Seconds since the terminal started.
    pub time: f32,
    pub distortion: f32,
    pub screen_curvature: f32,
    pub overlay_opacity: f32,
    pub static_noise: f32,
    pub flickering: f32,
    pub horizontal_sync: f32,
    pub glowing_line: f32,
    pub rasterization_intensity: f32,
    pub chroma_color: f32,
    pub bright_boost: f32,
    pub scanline_intensity: f32,
}

impl CrtUniforms {
    /// Uniform values for `kind` under the current config and layout.
    ///
    /// The border always gets zero for the transmission effects
    /// (see [`CrtControl::is_content_only`]) and no overlay.
    pub fn for_surface(
        config: &PhosphorConfig,
        kind: SurfaceKind,
        layout: &LayoutSnapshot,
        distortion_enabled: bool,
    ) -> Self {
        let placement = layout.placement();
        let crt = &config.crt;
        let content = kind == SurfaceKind::Content;
        let content_only = |value: f64| if content { value as f32 } else { 0.0 };

        let width = layout.viewport_width as f32;
        let height = layout.viewport_height as f32;

        Self {
            rect: match kind {
                SurfaceKind::Content => placement.content_ndc(),
                SurfaceKind::Border => placement.border_ndc(),
            },
            virtual_resolution: [width, height],
            overlay_repeat: overlay_repeat(width, height),
            font_color: color_or(&crt.colors.font, Color::WHITE).to_f32_array(),
            background_color: color_or(&crt.colors.background, Color::BLACK).to_f32_array(),
            time: 0.0,
            distortion: if distortion_enabled {
                layout.distortion as f32
            } else {
                0.0
            },
            screen_curvature: crt.curvature as f32,
            overlay_opacity: if content { CONTENT_OVERLAY_OPACITY } else { 0.0 },
            static_noise: content_only(crt.effects.static_noise),
            flickering: content_only(crt.effects.flickering),
            horizontal_sync: content_only(crt.effects.horizontal_sync),
            glowing_line: content_only(crt.effects.glowing_line),
            rasterization_intensity: content_only(crt.rasterization.intensity),
            chroma_color: crt.colors.chroma_color as f32,
            bright_boost: crt.rasterization.bright_boost as f32,
            scanline_intensity: crt.rasterization.scanline_intensity as f32,
        }
    }
}

/// Overlay repeats so one tile spans [`OVERLAY_TILE_WIDTH`] pixels.
/// The generated tile is square.
fn overlay_repeat(width: f32, height: f32) -> [f32; 2] {
    [width / OVERLAY_TILE_WIDTH, height / OVERLAY_TILE_WIDTH]
}

/// One independently writable region of [`CrtUniforms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrtControl {
    Rect,
    VirtualResolution,
    OverlayRepeat,
    FontColor,
    BackgroundColor,
    Time,
    Distortion,
    ScreenCurvature,
    OverlayOpacity,
    StaticNoise,
    Flickering,
    HorizontalSync,
    GlowingLine,
    RasterizationIntensity,
    ChromaColor,
    BrightBoost,
    ScanlineIntensity,
}

impl CrtControl {
    pub const ALL: [CrtControl; 17] = [
        CrtControl::Rect,
        CrtControl::VirtualResolution,
        CrtControl::OverlayRepeat,
        CrtControl::FontColor,
        CrtControl::BackgroundColor,
        CrtControl::Time,
        CrtControl::Distortion,
        CrtControl::ScreenCurvature,
        CrtControl::OverlayOpacity,
        CrtControl::StaticNoise,
        CrtControl::Flickering,
        CrtControl::HorizontalSync,
        CrtControl::GlowingLine,
        CrtControl::RasterizationIntensity,
        CrtControl::ChromaColor,
        CrtControl::BrightBoost,
        CrtControl::ScanlineIntensity,
    ];

    /// Byte offset of the slot inside the uniform block.
    pub fn offset(self) -> usize {
        match self {
            CrtControl::Rect => offset_of!(CrtUniforms, rect),
            CrtControl::VirtualResolution => offset_of!(CrtUniforms, virtual_resolution),
            CrtControl::OverlayRepeat => offset_of!(CrtUniforms, overlay_repeat),
            CrtControl::FontColor => offset_of!(CrtUniforms, font_color),
            CrtControl::BackgroundColor => offset_of!(CrtUniforms, background_color),
            CrtControl::Time => offset_of!(CrtUniforms, time),
            CrtControl::Distortion => offset_of!(CrtUniforms, distortion),
            CrtControl::ScreenCurvature => offset_of!(CrtUniforms, screen_curvature),
            CrtControl::OverlayOpacity => offset_of!(CrtUniforms, overlay_opacity),
            CrtControl::StaticNoise => offset_of!(CrtUniforms, static_noise),
            CrtControl::Flickering => offset_of!(CrtUniforms, flickering),
            CrtControl::HorizontalSync => offset_of!(CrtUniforms, horizontal_sync),
            CrtControl::GlowingLine => offset_of!(CrtUniforms, glowing_line),
            CrtControl::RasterizationIntensity => offset_of!(CrtUniforms, rasterization_intensity),
            CrtControl::ChromaColor => offset_of!(CrtUniforms, chroma_color),
            CrtControl::BrightBoost => offset_of!(CrtUniforms, bright_boost),
            CrtControl::ScanlineIntensity => offset_of!(CrtUniforms, scanline_intensity),
        }
    }

    /// Size of the slot in bytes.
    pub fn size(self) -> usize {
        match self {
            CrtControl::Rect | CrtControl::FontColor | CrtControl::BackgroundColor => 16,
            CrtControl::VirtualResolution | CrtControl::OverlayRepeat => 8,
            _ => 4,
        }
    }

    /// The slot's bytes in `uniforms`.
    pub fn bytes(self, uniforms: &CrtUniforms) -> &[u8] {
        let start = self.offset();
        &bytemuck::bytes_of(uniforms)[start..start + self.size()]
    }

    /// Effects that only the content surface receives.
    pub fn is_content_only(self) -> bool {
        matches!(
            self,
            CrtControl::StaticNoise
                | CrtControl::Flickering
                | CrtControl::HorizontalSync
                | CrtControl::GlowingLine
                | CrtControl::RasterizationIntensity
        )
    }
}

/// Controls whose slot differs between `old` and `new`. Time is excluded;
/// it is pushed every frame on its own.
pub fn changed_controls(old: &CrtUniforms, new: &CrtUniforms) -> Vec<CrtControl> {
    CrtControl::ALL
        .into_iter()
        .filter(|c| *c != CrtControl::Time && c.bytes(old) != c.bytes(new))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn uniforms(config: &PhosphorConfig, kind: SurfaceKind) -> CrtUniforms {
        CrtUniforms::for_surface(config, kind, &compute_layout(1280.0, 800.0), true)
    }

    #[test]
    fn uniform_block_size() {
        assert_eq!(std::mem::size_of::<CrtUniforms>(), 112);
    }

    #[test]
    fn slots_match_wgsl_offsets() {
        assert_eq!(CrtControl::Rect.offset(), 0);
        assert_eq!(CrtControl::VirtualResolution.offset(), 16);
        assert_eq!(CrtControl::OverlayRepeat.offset(), 24);
        assert_eq!(CrtControl::FontColor.offset(), 32);
        assert_eq!(CrtControl::BackgroundColor.offset(), 48);
        assert_eq!(CrtControl::Time.offset(), 64);
        assert_eq!(CrtControl::ScanlineIntensity.offset(), 108);
    }

    #[test]
    fn slots_tile_the_block_without_overlap() {
        let mut covered = [false; 112];
        for control in CrtControl::ALL {
            for byte in &mut covered[control.offset()..control.offset() + control.size()] {
                assert!(!*byte, "{control:?} overlaps another slot");
                *byte = true;
            }
        }
        assert!(covered.iter().all(|b| *b));
    }

    #[test]
    fn content_takes_config_effects() {
        let config = PhosphorConfig::default();
        let u = uniforms(&config, SurfaceKind::Content);
        assert!((u.flickering - 0.05).abs() < 1e-6);
        assert!((u.horizontal_sync - 0.1).abs() < 1e-6);
        assert!((u.rasterization_intensity - 0.7).abs() < 1e-6);
        assert!((u.overlay_opacity - 0.15).abs() < 1e-6);
        assert!((u.screen_curvature - 0.25).abs() < 1e-6);
        assert!((u.distortion - 0.27).abs() < 1e-6);
        assert_eq!(u.virtual_resolution, [1280.0, 800.0]);
        assert_eq!(u.rect, [-1.0, -1.0, 2.0, 2.0]);
    }

    #[test]
    fn border_forces_content_only_effects_to_zero() {
        let mut config = PhosphorConfig::default();
        config.crt.effects.static_noise = 0.8;
        config.crt.effects.glowing_line = 0.5;
        let u = uniforms(&config, SurfaceKind::Border);
        for control in CrtControl::ALL.into_iter().filter(|c| c.is_content_only()) {
            assert!(control.bytes(&u).iter().all(|b| *b == 0), "{control:?}");
        }
        assert_eq!(u.overlay_opacity, 0.0);
        assert!((u.screen_curvature - 0.25).abs() < 1e-6);
    }

    #[test]
    fn distortion_toggle_zeroes_slot() {
        let config = PhosphorConfig::default();
        let layout = compute_layout(1280.0, 800.0);
        let on = CrtUniforms::for_surface(&config, SurfaceKind::Content, &layout, true);
        let off = CrtUniforms::for_surface(&config, SurfaceKind::Content, &layout, false);
        assert_eq!(off.distortion, 0.0);
        assert_eq!(changed_controls(&on, &off), vec![CrtControl::Distortion]);
    }

    #[test]
    fn single_control_change_touches_single_slot() {
        let mut config = PhosphorConfig::default();
        let before = uniforms(&config, SurfaceKind::Content);
        config.crt.curvature = 0.6;
        let after = uniforms(&config, SurfaceKind::Content);
        assert_eq!(changed_controls(&before, &after), vec![CrtControl::ScreenCurvature]);

        config.crt.colors.font = "#00ff00".into();
        config.crt.effects.static_noise = 0.3;
        let again = uniforms(&config, SurfaceKind::Content);
        assert_eq!(
            changed_controls(&after, &again),
            vec![CrtControl::FontColor, CrtControl::StaticNoise]
        );
    }

    #[test]
    fn border_ignores_content_only_changes() {
        let mut config = PhosphorConfig::default();
        let before = uniforms(&config, SurfaceKind::Border);
        config.crt.effects.flickering = 0.4;
        config.crt.rasterization.intensity = 0.1;
        let after = uniforms(&config, SurfaceKind::Border);
        assert!(changed_controls(&before, &after).is_empty());
    }

    #[test]
    fn time_is_not_a_config_change() {
        let config = PhosphorConfig::default();
        let before = uniforms(&config, SurfaceKind::Content);
        let mut after = before;
        after.time = 12.5;
        assert!(changed_controls(&before, &after).is_empty());
    }

    #[test]
    fn resize_changes_geometry_slots() {
        let config = PhosphorConfig::default();
        let desktop =
            CrtUniforms::for_surface(&config, SurfaceKind::Content, &compute_layout(1920.0, 1080.0), true);
        let phone =
            CrtUniforms::for_surface(&config, SurfaceKind::Content, &compute_layout(375.0, 667.0), true);
        let changed = changed_controls(&desktop, &phone);
        assert!(changed.contains(&CrtControl::VirtualResolution));
        assert!(changed.contains(&CrtControl::OverlayRepeat));
        assert!(changed.contains(&CrtControl::Distortion));
        assert!(phone.distortion < desktop.distortion);
    }
}
