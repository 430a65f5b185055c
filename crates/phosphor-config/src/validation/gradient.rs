//! Bezel gradient ranges.

use crate::schema::{GradientStop, PhosphorConfig};

use super::helpers::clamp_f64;
use super::ClampedField;

pub(crate) fn clamp_gradient(out: &mut Vec<ClampedField>, config: &mut PhosphorConfig) {
    let gradient = &mut config.gradient;
    clamp_f64(
        out,
        "gradient.radiusMultiplier",
        &mut gradient.radius_multiplier,
        0.1,
        2.0,
    );
    clamp_f64(
        out,
        "gradient.centerOffset",
        &mut gradient.center_offset,
        -500.0,
        500.0,
    );
    clamp_stop(out, "gradient.startColor", &mut gradient.start_color);
    clamp_stop(out, "gradient.endColor", &mut gradient.end_color);
}

fn clamp_stop(out: &mut Vec<ClampedField>, prefix: &str, stop: &mut GradientStop) {
    clamp_f64(out, &format!("{prefix}.r"), &mut stop.r, 0.0, 255.0);
    clamp_f64(out, &format!("{prefix}.g"), &mut stop.g, 0.0, 255.0);
    clamp_f64(out, &format!("{prefix}.b"), &mut stop.b, 0.0, 255.0);
    clamp_f64(out, &format!("{prefix}.a"), &mut stop.a, 0.0, 1.0);
}
