//! Shared range helpers used by all domain clamps.

use super::ClampedField;

/// Clamp `value` into `[min, max]` (float), recording any change.
///
/// Non-finite values clamp to `min`.
pub(crate) fn clamp_f64(
    out: &mut Vec<ClampedField>,
    name: &str,
    value: &mut f64,
    min: f64,
    max: f64,
) {
    let original = *value;
    let clamped = if original.is_finite() {
        original.clamp(min, max)
    } else {
        min
    };
    if clamped != original || !original.is_finite() {
        *value = clamped;
        out.push(ClampedField {
            name: name.to_string(),
            value: original,
            clamped,
        });
    }
}

/// Clamp `value` into `[min, max]` (integer), recording any change.
pub(crate) fn clamp_u32(
    out: &mut Vec<ClampedField>,
    name: &str,
    value: &mut u32,
    min: u32,
    max: u32,
) {
    let original = *value;
    let clamped = original.clamp(min, max);
    if clamped != original {
        *value = clamped;
        out.push(ClampedField {
            name: name.to_string(),
            value: original as f64,
            clamped: clamped as f64,
        });
    }
}

/// Push an error if `value` is not a parseable hex color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if crate::colors::parse_hex_color(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a #RGB or #RRGGBB color"));
    }
}
