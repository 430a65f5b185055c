//! GPU text for the content surface.
//!
//! Scene code describes text as [`TextItem`]s positioned by their alphabetic
//! baseline, the way a 2D canvas places `fillText`. The renderer converts
//! baselines to glyphon's top-of-line coordinates and fakes the canvas
//! `shadowBlur` glow with faint offset copies.

mod renderer;

pub use renderer::TextSurface;

use phosphor_common::Color;

/// Fraction of the font size between a line's ascent and its baseline.
pub const ASCENT_RATIO: f32 = 0.8;

/// Number of offset copies drawn per glowing item.
pub const GLOW_SAMPLES: usize = 8;

/// Horizontal anchor of [`TextItem::x`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Soft halo around a text item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    /// Canvas-style blur amount in pixels.
    pub blur: f32,
}

/// One run of single-line text in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Anchor x; meaning depends on `align`.
    pub x: f32,
    /// Alphabetic baseline.
    pub baseline: f32,
    pub align: TextAlign,
    pub font_size: f32,
    pub line_height: f32,
    pub color: Color,
    pub glow: Option<Glow>,
}

impl TextItem {
    /// Left edge given the measured width of the text.
    pub fn left(&self, width: f32) -> f32 {
        match self.align {
            TextAlign::Left => self.x,
            TextAlign::Center => self.x - width / 2.0,
            TextAlign::Right => self.x - width,
        }
    }

    /// Top of the glyphon line box whose baseline lands on `self.baseline`.
    pub fn top(&self) -> f32 {
        let leading = (self.line_height - self.font_size).max(0.0) / 2.0;
        self.baseline - self.font_size * ASCENT_RATIO - leading
    }
}

/// Offsets of the glow copies: a ring at a radius derived from the blur.
pub fn glow_offsets(blur: f32) -> [(f32, f32); GLOW_SAMPLES] {
    let radius = (blur / 5.0).max(0.0);
    let mut offsets = [(0.0, 0.0); GLOW_SAMPLES];
    for (i, offset) in offsets.iter_mut().enumerate() {
        let angle = i as f32 / GLOW_SAMPLES as f32 * std::f32::consts::TAU;
        *offset = (angle.cos() * radius, angle.sin() * radius);
    }
    offsets
}

/// Alpha applied to each glow copy. Zero blur disables the glow.
pub fn glow_alpha(blur: f32) -> f32 {
    (blur / 30.0 * 0.35).clamp(0.0, 0.35)
}
