//! Animation, phase and request timing ranges.

use crate::schema::PhosphorConfig;

use super::helpers::{clamp_f64, clamp_u32};
use super::ClampedField;

pub(crate) fn clamp_terminal(out: &mut Vec<ClampedField>, config: &mut PhosphorConfig) {
    let terminal = &mut config.terminal;
    clamp_u32(
        out,
        "terminal.frameDelay",
        &mut terminal.frame_delay,
        40,
        200,
    );
    clamp_u32(
        out,
        "terminal.totalFrames",
        &mut terminal.total_frames,
        1,
        240,
    );
    clamp_f64(
        out,
        "terminal.glitchSpeed",
        &mut terminal.glitch_speed,
        0.0,
        500.0,
    );
    clamp_u32(
        out,
        "terminal.phases.bootDuration",
        &mut terminal.phases.boot_duration,
        1000,
        10000,
    );
    clamp_u32(
        out,
        "terminal.phases.postBootDuration",
        &mut terminal.phases.post_boot_duration,
        30000,
        120000,
    );
}

pub(crate) fn clamp_api(out: &mut Vec<ClampedField>, config: &mut PhosphorConfig) {
    clamp_u32(
        out,
        "api.timeoutMs",
        &mut config.api.timeout_ms,
        1000,
        60000,
    );
}
