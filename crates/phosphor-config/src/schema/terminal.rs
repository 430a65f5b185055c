//! Terminal timing and boot script configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminalConfig {
    /// Milliseconds per logo animation frame (valid range: 40-200).
    pub frame_delay: u32,
    /// Number of logo animation frames (valid range: 1-240).
    pub total_frames: u32,
    /// Glitch line drift in pixels per second (valid range: 0-500).
    pub glitch_speed: f64,
    pub phases: PhaseDurations,
    pub boot_sequence: Vec<BootEntry>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            frame_delay: 80,
            total_frames: 48,
            glitch_speed: 50.0,
            phases: PhaseDurations::default(),
            boot_sequence: default_boot_sequence(),
        }
    }
}

/// Countdown lengths for each phase, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhaseDurations {
    /// Valid range: 1000-10000.
    pub boot_duration: u32,
    /// Valid range: 30000-120000.
    pub post_boot_duration: u32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            boot_duration: 3000,
            post_boot_duration: 90000,
        }
    }
}

/// One step of the boot script.
///
/// Serialized as `{"type": "line", "content": "..."}` or
/// `{"type": "block", "content": ["...", "..."]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum BootEntry {
    Line(String),
    Block(Vec<String>),
}

impl BootEntry {
    /// Lines this entry appends to the boot display.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            BootEntry::Line(text) => vec![text.as_str()],
            BootEntry::Block(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

fn default_boot_sequence() -> Vec<BootEntry> {
    let line = |s: &str| BootEntry::Line(s.to_string());
    let block = |lines: &[&str]| BootEntry::Block(lines.iter().map(|s| s.to_string()).collect());
    vec![
        line("Starting MS-GOD..."),
        line("Shinku is testing extended memory...done."),
        line("Starting GIAD Terminal Protocol..."),
        block(&[
            "C:\\GIAD\\TERMINAL.EXE",
            "God is a designer © All Rights Reserved.",
            "1981 to 2049 / United States of America.",
            "神はクリエイターである",
        ]),
        line("Department of Design and Aesthetics"),
        line("創造に触発されて"),
        line(""),
        block(&[
            "DOS        <DIR>     12.05.20       15:57",
            "COMMAND    COM       94.05.31       6:22",
            "GIAD20     2008      173.255.189.42 6:22",
            "CONFIG     SYS       12.05.20       15:57",
            "AUTOEXEC  BAT        12.05.20",
            "5 File(s)             292864 bytes free",
            "Memory size: 116432 bytes",
        ]),
        line("Free disk space: 1842 MB"),
        line("GIAD<r> Terminal Protocol initiated."),
        line("Press any key to continue..."),
    ]
}
