//! Terminal settings extracted from the configuration tree.

use std::collections::BTreeMap;
use std::time::Duration;

use phosphor_config::schema::BootEntry;
use phosphor_config::PhosphorConfig;

/// Delay after a single boot line before the next entry plays.
pub const LINE_DELAY: Duration = Duration::from_millis(150);
/// Delay after a boot block before the next entry plays.
pub const BLOCK_DELAY: Duration = Duration::from_millis(500);
/// Spinner frame period while a command is in flight.
pub const SPINNER_PERIOD: Duration = Duration::from_millis(200);
/// Cursor blink half-period, in seconds.
pub const CURSOR_PERIOD_SECS: f64 = 0.5;
/// Per-tick probability that the glitch line jumps to a random row.
pub const GLITCH_TELEPORT_CHANCE: f64 = 0.015;

/// The subset of [`PhosphorConfig`] the state machine reads.
///
/// Captured at `init` time; a config import takes effect on the next
/// restart, the same way the countdowns are fixed once they start.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSettings {
    pub boot_script: Vec<BootEntry>,
    pub boot_duration: Duration,
    pub post_boot_duration: Duration,
    pub frame_delay: Duration,
    pub total_frames: u32,
    /// Glitch line speed in pixels per second.
    pub glitch_speed: f64,
    pub default_messages: BTreeMap<String, String>,
}

impl TerminalSettings {
    pub fn from_config(config: &PhosphorConfig) -> Self {
        let terminal = &config.terminal;
        Self {
            boot_script: terminal.boot_sequence.clone(),
            boot_duration: Duration::from_millis(u64::from(terminal.phases.boot_duration)),
            post_boot_duration: Duration::from_millis(u64::from(
                terminal.phases.post_boot_duration,
            )),
            frame_delay: Duration::from_millis(u64::from(terminal.frame_delay.max(1))),
            total_frames: terminal.total_frames.max(1),
            glitch_speed: terminal.glitch_speed,
            default_messages: config.api.default_messages.clone(),
        }
    }

    /// Built-in reply for a normalized command.
    pub fn default_message(&self, command: &str) -> Option<&str> {
        self.default_messages.get(command).map(String::as_str)
    }
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self::from_config(&PhosphorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let settings = TerminalSettings::default();
        assert_eq!(settings.boot_script.len(), 11);
        assert_eq!(settings.boot_duration, Duration::from_millis(3000));
        assert_eq!(settings.post_boot_duration, Duration::from_millis(90_000));
        assert_eq!(settings.frame_delay, Duration::from_millis(80));
        assert_eq!(settings.total_frames, 48);
        assert!(settings.default_message("giad").is_some());
        assert_eq!(settings.default_message("ls"), None);
    }

    #[test]
    fn zero_frame_values_are_guarded() {
        let mut config = PhosphorConfig::default();
        config.terminal.frame_delay = 0;
        config.terminal.total_frames = 0;
        let settings = TerminalSettings::from_config(&config);
        assert_eq!(settings.frame_delay, Duration::from_millis(1));
        assert_eq!(settings.total_frames, 1);
    }
}
