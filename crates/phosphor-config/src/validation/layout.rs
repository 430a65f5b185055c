//! UI geometry and text style ranges.

use crate::schema::PhosphorConfig;

use super::helpers::{clamp_f64, validate_color};
use super::ClampedField;

pub(crate) fn clamp_ui(out: &mut Vec<ClampedField>, config: &mut PhosphorConfig) {
    let ui = &mut config.ui;
    let button = &mut ui.access_button;
    clamp_f64(
        out,
        "ui.accessButton.position.x",
        &mut button.position.x,
        0.0,
        1.0,
    );
    clamp_f64(
        out,
        "ui.accessButton.position.y",
        &mut button.position.y,
        0.0,
        1.0,
    );
    clamp_f64(
        out,
        "ui.accessButton.size.width",
        &mut button.size.width,
        50.0,
        1000.0,
    );
    clamp_f64(
        out,
        "ui.accessButton.size.height",
        &mut button.size.height,
        20.0,
        300.0,
    );
    clamp_f64(out, "ui.borderMargin", &mut ui.border_margin, 10.0, 100.0);
    clamp_f64(out, "ui.borderRadius", &mut ui.border_radius, 0.0, 50.0);
}

pub(crate) fn clamp_text(out: &mut Vec<ClampedField>, config: &mut PhosphorConfig) {
    let text = &mut config.text;
    clamp_f64(out, "text.glowIntensity", &mut text.glow_intensity, 0.0, 30.0);
    clamp_f64(out, "text.lineHeight", &mut text.line_height, 16.0, 40.0);
    clamp_f64(
        out,
        "text.fontSize.desktop",
        &mut text.font_size.desktop,
        12.0,
        30.0,
    );
    clamp_f64(
        out,
        "text.fontSize.mobile",
        &mut text.font_size.mobile,
        12.0,
        30.0,
    );
}

pub(crate) fn validate_text_colors(errors: &mut Vec<String>, config: &PhosphorConfig) {
    validate_color(errors, "text.color", &config.text.color);
    validate_color(errors, "text.glowColor", &config.text.glow_color);
}
