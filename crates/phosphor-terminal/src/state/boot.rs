use std::time::Instant;

use phosphor_config::schema::BootEntry;
use tracing::{debug, info};

use super::{TerminalState, TerminalTimer};
use crate::settings::{BLOCK_DELAY, LINE_DELAY};
use crate::types::Phase;
use crate::MAX_BOOT_LINES;

impl TerminalState {
    /// Append one line to the boot display, dropping the oldest line once
    /// [`MAX_BOOT_LINES`] are shown.
    pub fn add_boot_line(&mut self, line: impl Into<String>) {
        if self.boot_lines.len() == MAX_BOOT_LINES {
            self.boot_lines.pop_front();
        }
        self.boot_lines.push_back(line.into());
    }

    /// Play the next boot script entry and schedule the one after it.
    ///
    /// A line waits 150ms before the next entry, a block 500ms. Once the
    /// script is exhausted the boot countdown starts; later calls leave it
    /// untouched.
    pub fn advance_boot_script(&mut self, now: Instant) {
        if self.phase != Phase::Boot {
            return;
        }

        let Some(entry) = self.settings.boot_script.get(self.boot_index).cloned() else {
            if self.boot_end.is_none() {
                self.boot_end = Some(now + self.settings.boot_duration);
                info!(
                    duration_ms = self.settings.boot_duration.as_millis() as u64,
                    "Boot script finished, countdown started"
                );
            }
            return;
        };

        self.boot_index += 1;
        let delay = match &entry {
            BootEntry::Line(_) => LINE_DELAY,
            BootEntry::Block(_) => BLOCK_DELAY,
        };
        for line in entry.lines() {
            self.add_boot_line(line);
        }
        debug!(index = self.boot_index, "Boot entry played");
        self.timers.schedule(now + delay, TerminalTimer::BootStep);
    }

    /// Enter [`Phase::PostBoot`] and start its countdown.
    ///
    /// Returns `false` without touching anything when already in post-boot.
    pub fn transition_to_post_boot(&mut self, now: Instant) -> bool {
        if self.phase == Phase::PostBoot {
            return false;
        }
        self.phase = Phase::PostBoot;
        self.post_boot_end = Some(now + self.settings.post_boot_duration);
        info!(
            duration_ms = self.settings.post_boot_duration.as_millis() as u64,
            "Entered post-boot phase"
        );
        true
    }
}
