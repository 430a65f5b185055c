//! CRT shader parameter ranges.

use crate::schema::PhosphorConfig;

use super::helpers::{clamp_f64, validate_color};
use super::ClampedField;

pub(crate) fn clamp_crt(out: &mut Vec<ClampedField>, config: &mut PhosphorConfig) {
    let crt = &mut config.crt;
    clamp_f64(out, "crt.curvature", &mut crt.curvature, 0.0, 1.0);
    clamp_f64(out, "crt.distortion", &mut crt.distortion, 0.0, 1.0);

    let raster = &mut crt.rasterization;
    clamp_f64(
        out,
        "crt.rasterization.intensity",
        &mut raster.intensity,
        0.0,
        1.0,
    );
    clamp_f64(
        out,
        "crt.rasterization.brightBoost",
        &mut raster.bright_boost,
        0.0,
        1.0,
    );
    clamp_f64(
        out,
        "crt.rasterization.scanlineIntensity",
        &mut raster.scanline_intensity,
        0.0,
        1.0,
    );

    let fx = &mut crt.effects;
    clamp_f64(out, "crt.effects.staticNoise", &mut fx.static_noise, 0.0, 1.0);
    clamp_f64(out, "crt.effects.flickering", &mut fx.flickering, 0.0, 0.5);
    clamp_f64(
        out,
        "crt.effects.horizontalSync",
        &mut fx.horizontal_sync,
        0.0,
        0.5,
    );
    clamp_f64(out, "crt.effects.glowingLine", &mut fx.glowing_line, 0.0, 1.0);

    clamp_f64(
        out,
        "crt.colors.chromaColor",
        &mut crt.colors.chroma_color,
        0.0,
        1.0,
    );
}

pub(crate) fn validate_crt_colors(errors: &mut Vec<String>, config: &PhosphorConfig) {
    let colors = &config.crt.colors;
    validate_color(errors, "crt.colors.font", &colors.font);
    validate_color(errors, "crt.colors.background", &colors.background);
    validate_color(errors, "crt.colors.bezel", &colors.bezel);
}
