//! [`TerminalState`]: phase, boot playback, prompt and animation fields.
//!
//! Split across submodules by concern:
//! - `boot`: boot script playback and the phase transition
//! - `command`: command submission, spinner and reply handling
//! - `input`: key routing and scrolling
//! - `animation`: per-tick glitch, cursor and logo frame updates

mod animation;
mod boot;
mod command;
mod input;

#[cfg(test)]
mod tests;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::settings::TerminalSettings;
use crate::timer::{TimerId, TimerQueue};
use crate::types::Phase;

/// Deferred work owned by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalTimer {
    BootStep,
    SpinnerTick,
}

#[derive(Debug)]
struct PendingCommand {
    id: u64,
    command: String,
    spinner_timer: TimerId,
    spinner_index: usize,
}

/// Everything currently on screen.
pub struct TerminalState {
    settings: TerminalSettings,
    phase: Phase,
    start: Instant,

    boot_index: usize,
    boot_lines: VecDeque<String>,
    boot_end: Option<Instant>,
    post_boot_end: Option<Instant>,

    command_input: String,
    response: String,
    scroll_offset: usize,
    scroll_limit: Option<usize>,
    pending: Option<PendingCommand>,
    last_request_id: u64,

    glitch_y: f64,
    last_glitch_update: Instant,
    cursor_visible: bool,
    cursor_timer: f64,
    frame_index: u32,
    focused: bool,

    timers: TimerQueue<TerminalTimer>,
}

impl TerminalState {
    /// Create a fresh state and start boot playback at `now`.
    pub fn new(settings: TerminalSettings, now: Instant) -> Self {
        let mut state = Self {
            settings,
            phase: Phase::Boot,
            start: now,
            boot_index: 0,
            boot_lines: VecDeque::with_capacity(crate::MAX_BOOT_LINES),
            boot_end: None,
            post_boot_end: None,
            command_input: String::new(),
            response: String::new(),
            scroll_offset: 0,
            scroll_limit: None,
            pending: None,
            last_request_id: 0,
            glitch_y: 0.0,
            last_glitch_update: now,
            cursor_visible: true,
            cursor_timer: 0.0,
            frame_index: 0,
            focused: true,
            timers: TimerQueue::new(),
        };
        state.init(now);
        state
    }

    /// Reset every field, return to [`Phase::Boot`] and schedule the first
    /// boot step.
    ///
    /// Pending timers are dropped and the request counter is kept, so a reply
    /// for a command issued before the reset is recognized as stale.
    pub fn init(&mut self, now: Instant) {
        self.timers.clear();
        self.phase = Phase::Boot;
        self.start = now;
        self.boot_index = 0;
        self.boot_lines.clear();
        self.boot_end = None;
        self.post_boot_end = None;
        self.command_input.clear();
        self.response.clear();
        self.scroll_offset = 0;
        self.scroll_limit = None;
        self.pending = None;
        self.last_request_id += 1;
        self.glitch_y = 0.0;
        self.last_glitch_update = now;
        self.cursor_visible = true;
        self.cursor_timer = 0.0;
        self.frame_index = 0;
        self.focused = true;

        self.timers.schedule(now, TerminalTimer::BootStep);
        debug!(entries = self.settings.boot_script.len(), "Terminal state initialized");
    }

    /// Replace the settings and restart from the boot phase.
    pub fn restart(&mut self, settings: TerminalSettings, now: Instant) {
        self.settings = settings;
        self.init(now);
    }

    /// Fire every due timer. Returns `true` if any fired.
    pub fn run_timers(&mut self, now: Instant) -> bool {
        let mut fired = false;
        while let Some(timer) = self.timers.pop_due(now) {
            fired = true;
            match timer {
                TerminalTimer::BootStep => self.advance_boot_script(now),
                TerminalTimer::SpinnerTick => self.advance_spinner(now),
            }
        }
        fired
    }

    /// Earliest pending timer, for event loop scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn settings(&self) -> &TerminalSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn start_time(&self) -> Instant {
        self.start
    }

    /// Time since the last `init`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    pub fn boot_index(&self) -> usize {
        self.boot_index
    }

    pub fn boot_lines(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.boot_lines.iter().map(String::as_str)
    }

    pub fn boot_end(&self) -> Option<Instant> {
        self.boot_end
    }

    pub fn post_boot_end(&self) -> Option<Instant> {
        self.post_boot_end
    }

    pub fn command_input(&self) -> &str {
        &self.command_input
    }

    /// Last response text, or the loading placeholder.
    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn glitch_y(&self) -> f64 {
        self.glitch_y
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// Whole seconds left until `end`, rounded up.
pub fn seconds_remaining(end: Instant, now: Instant) -> u64 {
    let left = end.saturating_duration_since(now);
    let millis = left.as_millis() as u64;
    millis.div_ceil(1000)
}
