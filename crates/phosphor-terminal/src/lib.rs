//! Phase state machine for the phosphor terminal.
//!
//! [`TerminalState`] is the single source of truth for what is on screen:
//! boot script playback, the post-boot prompt, the command lifecycle and
//! the time-driven animation fields. Every operation takes an explicit
//! `Instant` so the whole machine can be driven deterministically in tests.

pub mod settings;
pub mod state;
pub mod timer;
pub mod types;
pub mod wrap;

pub use settings::TerminalSettings;
pub use state::{seconds_remaining, TerminalState};
pub use timer::{TimerId, TimerQueue};
pub use types::{KeyInput, KeyOutcome, NamedKey, Phase, PhaseSignal, SubmittedCommand};
pub use wrap::{wrap_text, MonospaceMeasure, TextMeasure};

/// Maximum number of boot lines kept on screen.
pub const MAX_BOOT_LINES: usize = 16;

/// Boot entries that must have played before a keypress may skip ahead.
pub const BOOT_SKIP_THRESHOLD: usize = 10;

/// Prefix shown when a command request fails.
pub const FALLBACK_PREFIX: &str = "CONNECTION TIMED OUT. USING FALLBACK: ";

/// Reply used when a command has no built-in default message.
pub const NOT_RECOGNIZED: &str = "Command not recognized.";

/// Spinner glyphs cycled while a command request is in flight.
pub const SPINNER_GLYPHS: [char; 4] = ['–', '/', '|', '\\'];
