//! CRT shader configuration types.
//!
//! Every scalar here maps onto one CRT material uniform. The border
//! material ignores the content-only effects regardless of these values.

use serde::{Deserialize, Serialize};

/// Top-level CRT settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrtConfig {
    /// Barrel distortion strength (valid range: 0.0-1.0).
    pub curvature: f64,
    /// Base distortion before the layout overrides it (valid range: 0.0-1.0).
    pub distortion: f64,
    pub rasterization: RasterizationConfig,
    pub effects: CrtEffectsConfig,
    pub colors: CrtColorsConfig,
}

impl Default for CrtConfig {
    fn default() -> Self {
        Self {
            curvature: 0.25,
            distortion: 0.35,
            rasterization: RasterizationConfig::default(),
            effects: CrtEffectsConfig::default(),
            colors: CrtColorsConfig::default(),
        }
    }
}

/// Scanline rasterization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RasterizationConfig {
    /// Mix between the raw texel and the scanline color (valid range: 0.0-1.0).
    pub intensity: f64,
    /// Brightness boost on scanline peaks (valid range: 0.0-1.0).
    pub bright_boost: f64,
    /// Darkening in scanline troughs (valid range: 0.0-1.0).
    pub scanline_intensity: f64,
}

impl Default for RasterizationConfig {
    fn default() -> Self {
        Self {
            intensity: 0.7,
            bright_boost: 0.30,
            scanline_intensity: 0.30,
        }
    }
}

/// Analog signal effects applied to the content surface only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrtEffectsConfig {
    /// Valid range: 0.0-1.0.
    pub static_noise: f64,
    /// Valid range: 0.0-0.5.
    pub flickering: f64,
    /// Valid range: 0.0-0.5.
    pub horizontal_sync: f64,
    /// Valid range: 0.0-1.0.
    pub glowing_line: f64,
}

impl Default for CrtEffectsConfig {
    fn default() -> Self {
        Self {
            static_noise: 0.0,
            flickering: 0.05,
            horizontal_sync: 0.1,
            glowing_line: 0.0,
        }
    }
}

/// Shader colors, stored as hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrtColorsConfig {
    pub font: String,
    pub background: String,
    pub bezel: String,
    /// Saturation kept when converting to the font tint (valid range: 0.0-1.0).
    pub chroma_color: f64,
}

impl Default for CrtColorsConfig {
    fn default() -> Self {
        Self {
            font: "#ffffff".into(),
            background: "#000000".into(),
            bezel: "#2A2520".into(),
            chroma_color: 0.5,
        }
    }
}
