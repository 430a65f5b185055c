//! Radial gradient painted over the bezel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientConfig {
    /// Scales the half-diagonal radius (valid range: 0.1-2.0).
    pub radius_multiplier: f64,
    /// Pixel offset applied to both axes of the center (valid range: -500-500).
    pub center_offset: f64,
    pub start_color: GradientStop,
    pub end_color: GradientStop,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            radius_multiplier: 1.0,
            center_offset: 0.0,
            start_color: GradientStop {
                r: 100.0,
                g: 100.0,
                b: 100.0,
                a: 0.3,
            },
            end_color: GradientStop {
                r: 50.0,
                g: 50.0,
                b: 50.0,
                a: 0.1,
            },
        }
    }
}

/// One gradient color stop. Channels are 0-255, alpha is 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientStop {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for GradientStop {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl GradientStop {
    /// Straight (non-premultiplied) RGBA in 0.0-1.0.
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            (self.r / 255.0) as f32,
            (self.g / 255.0) as f32,
            (self.b / 255.0) as f32,
            self.a as f32,
        ]
    }
}
