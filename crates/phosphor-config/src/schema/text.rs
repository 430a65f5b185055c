//! Text styling for the content surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextConfig {
    /// Fill color as hex string.
    pub color: String,
    /// Glow color as hex string.
    pub glow_color: String,
    /// Glow spread in pixels (valid range: 0-30).
    pub glow_intensity: f64,
    /// Line advance in pixels (valid range: 16-40).
    pub line_height: f64,
    pub font_size: FontSizeConfig,
    /// Font family name, or `monospace` for the system monospace face.
    pub font_family: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".into(),
            glow_color: "#fd501f".into(),
            glow_intensity: 10.0,
            line_height: 24.0,
            font_size: FontSizeConfig::default(),
            font_family: "monospace".into(),
        }
    }
}

/// Font size per form factor, in pixels (valid range: 12-30).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizeConfig {
    pub desktop: f64,
    pub mobile: f64,
}

impl Default for FontSizeConfig {
    fn default() -> Self {
        Self {
            desktop: 18.0,
            mobile: 20.0,
        }
    }
}

impl FontSizeConfig {
    pub fn for_layout(&self, is_mobile: bool) -> f64 {
        if is_mobile {
            self.mobile
        } else {
            self.desktop
        }
    }
}
