//! Interactive element and bezel geometry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub access_button: AccessButtonConfig,
    /// Inset of the inner screen from the window edge (valid range: 10-100).
    pub border_margin: f64,
    /// Corner radius of the inner screen (valid range: 0-50).
    pub border_radius: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            access_button: AccessButtonConfig::default(),
            border_margin: 25.0,
            border_radius: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessButtonConfig {
    pub text: String,
    pub url: String,
    pub position: ButtonPosition,
    pub size: ButtonSize,
}

impl Default for AccessButtonConfig {
    fn default() -> Self {
        Self {
            text: "ACCESS TERMINAL".into(),
            url: "https://terminal.godisadesigner.com/".into(),
            position: ButtonPosition::default(),
            size: ButtonSize::default(),
        }
    }
}

/// Button center as fractions of the content size (valid range: 0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for ButtonPosition {
    fn default() -> Self {
        Self { x: 0.5, y: 0.65 }
    }
}

/// Hit-test size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSize {
    /// Valid range: 50-1000.
    pub width: f64,
    /// Valid range: 20-300.
    pub height: f64,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 50.0,
        }
    }
}
