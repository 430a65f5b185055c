//! Range enforcement and format checks.
//!
//! Numeric fields are clamped into their editing range (never rejected);
//! each clamp is reported so the caller can log it. Malformed colors and
//! an unusable endpoint are hard errors, collected into a single
//! `ConfigError`.

mod crt;
mod gradient;
mod helpers;
mod layout;
mod timing;


use crate::schema::PhosphorConfig;
use phosphor_common::ConfigError;

/// A numeric field that was pulled back into range.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampedField {
    pub name: String,
    pub value: f64,
    pub clamped: f64,
}

/// Clamp every numeric field into range, returning what changed.
pub fn clamp(config: &mut PhosphorConfig) -> Vec<ClampedField> {
    let mut out = Vec::new();
    crt::clamp_crt(&mut out, config);
    gradient::clamp_gradient(&mut out, config);
    timing::clamp_terminal(&mut out, config);
    timing::clamp_api(&mut out, config);
    layout::clamp_ui(&mut out, config);
    layout::clamp_text(&mut out, config);
    out
}

/// Check the fields that cannot be clamped, collecting all errors.
pub fn validate(config: &PhosphorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    crt::validate_crt_colors(&mut errors, config);
    layout::validate_text_colors(&mut errors, config);

    let endpoint = config.api.endpoint.trim();
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        errors.push(format!("api.endpoint = {endpoint:?} is not an http(s) URL"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
