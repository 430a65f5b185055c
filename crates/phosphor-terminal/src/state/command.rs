use std::time::Instant;

use phosphor_remote::{CommandReply, RemoteError};
use tracing::{debug, info, warn};

use super::{PendingCommand, TerminalState, TerminalTimer};
use crate::settings::SPINNER_PERIOD;
use crate::types::SubmittedCommand;
use crate::{FALLBACK_PREFIX, NOT_RECOGNIZED, SPINNER_GLYPHS};

fn loading_text(index: usize) -> String {
    format!("LOADING {}", SPINNER_GLYPHS[index % SPINNER_GLYPHS.len()])
}

impl TerminalState {
    /// Accept a command from the prompt.
    ///
    /// The text is trimmed and lowercased. Blank input changes nothing and
    /// returns `None`. Otherwise the input buffer is cleared, the response
    /// area shows a spinner, and the returned command must be sent to the
    /// endpoint. A newer submission supersedes any in-flight one.
    pub fn submit_command(&mut self, raw: &str, now: Instant) -> Option<SubmittedCommand> {
        let command = raw.trim().to_lowercase();
        if command.is_empty() {
            return None;
        }

        self.command_input.clear();
        if let Some(previous) = self.pending.take() {
            self.timers.cancel(previous.spinner_timer);
            debug!(id = previous.id, "Superseded in-flight command");
        }

        self.last_request_id += 1;
        let id = self.last_request_id;
        let spinner_timer = self
            .timers
            .schedule(now + SPINNER_PERIOD, TerminalTimer::SpinnerTick);
        self.pending = Some(PendingCommand {
            id,
            command: command.clone(),
            spinner_timer,
            spinner_index: 0,
        });
        self.response = loading_text(0);
        self.scroll_offset = 0;
        self.scroll_limit = None;

        info!(id, command = %command, "Command submitted");
        Some(SubmittedCommand { id, command })
    }

    /// Apply the endpoint's answer for request `id`.
    ///
    /// Replies for anything but the latest submission are dropped and
    /// `false` is returned. A failure never propagates: it becomes the
    /// fallback text for the command.
    pub fn apply_reply(&mut self, id: u64, outcome: Result<CommandReply, RemoteError>) -> bool {
        if self.pending.as_ref().map(|p| p.id) != Some(id) {
            debug!(id, "Dropping stale command reply");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.timers.cancel(pending.spinner_timer);

        let builtin = self.settings.default_message(&pending.command);
        self.response = match outcome {
            Ok(reply) => reply
                .message
                .filter(|m| !m.is_empty())
                .or_else(|| builtin.map(str::to_string))
                .unwrap_or_else(|| NOT_RECOGNIZED.to_string()),
            Err(e) => {
                warn!(id, command = %pending.command, error = %e, "Command request failed, using fallback");
                format!("{FALLBACK_PREFIX}{}", builtin.unwrap_or(NOT_RECOGNIZED))
            }
        };
        self.scroll_offset = 0;
        self.scroll_limit = None;
        true
    }

    /// Whether a submission is still waiting for its reply.
    pub fn has_pending_command(&self) -> bool {
        self.pending.is_some()
    }

    pub(super) fn advance_spinner(&mut self, now: Instant) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        pending.spinner_index = (pending.spinner_index + 1) % SPINNER_GLYPHS.len();
        pending.spinner_timer = self
            .timers
            .schedule(now + SPINNER_PERIOD, TerminalTimer::SpinnerTick);
        self.response = loading_text(pending.spinner_index);
    }
}
