use std::time::Instant;

use tracing::debug;

use super::TerminalState;
use crate::types::{KeyInput, KeyOutcome, NamedKey, Phase};
use crate::BOOT_SKIP_THRESHOLD;

impl TerminalState {
    /// Route one key press.
    ///
    /// During boot any key skips ahead once more than
    /// [`BOOT_SKIP_THRESHOLD`] entries have played. In post-boot the key
    /// edits the prompt, submits it, or scrolls the response while the
    /// prompt is empty. Modifier and navigation keys never reach the buffer.
    pub fn handle_key(&mut self, key: &KeyInput, now: Instant) -> KeyOutcome {
        match self.phase {
            Phase::Boot => {
                if self.boot_index > BOOT_SKIP_THRESHOLD && self.transition_to_post_boot(now) {
                    debug!("Boot skipped by key press");
                    KeyOutcome::EnteredPostBoot
                } else {
                    KeyOutcome::Ignored
                }
            }
            Phase::PostBoot => self.handle_prompt_key(key, now),
        }
    }

    fn handle_prompt_key(&mut self, key: &KeyInput, now: Instant) -> KeyOutcome {
        match key {
            KeyInput::Named(NamedKey::ArrowUp) if self.command_input.is_empty() => {
                self.scroll_up();
                KeyOutcome::Handled
            }
            KeyInput::Named(NamedKey::ArrowDown) if self.command_input.is_empty() => {
                self.scroll_down();
                KeyOutcome::Handled
            }
            KeyInput::Named(NamedKey::Backspace) => {
                self.command_input.pop();
                KeyOutcome::Handled
            }
            KeyInput::Named(NamedKey::Enter) => {
                let raw = self.command_input.clone();
                match self.submit_command(&raw, now) {
                    Some(submitted) => KeyOutcome::Submitted(submitted),
                    None => KeyOutcome::Ignored,
                }
            }
            KeyInput::Named(NamedKey::Space) => {
                self.command_input.push(' ');
                KeyOutcome::Handled
            }
            KeyInput::Character(text) => match printable_char(text) {
                Some(c) => {
                    self.command_input.push(c);
                    KeyOutcome::Handled
                }
                None => KeyOutcome::Ignored,
            },
            KeyInput::Named(_) => KeyOutcome::Ignored,
        }
    }

    /// Move the response window up one line, stopping at the top.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Move the response window down one line.
    ///
    /// Bounded by the limit from [`set_scroll_limit`](Self::set_scroll_limit)
    /// once the compositor has measured the response.
    pub fn scroll_down(&mut self) {
        let next = self.scroll_offset + 1;
        self.scroll_offset = match self.scroll_limit {
            Some(limit) => next.min(limit),
            None => next,
        };
    }

    /// Record the largest useful offset: wrapped lines minus visible lines.
    pub fn set_scroll_limit(&mut self, limit: usize) {
        self.scroll_limit = Some(limit);
        self.scroll_offset = self.scroll_offset.min(limit);
    }
}

/// A single non-control character, or `None`.
fn printable_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Some(c),
        _ => None,
    }
}
