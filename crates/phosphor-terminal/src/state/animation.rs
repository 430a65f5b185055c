use std::time::Instant;

use rand::Rng;

use super::TerminalState;
use crate::settings::{CURSOR_PERIOD_SECS, GLITCH_TELEPORT_CHANCE};
use crate::types::{Phase, PhaseSignal};

impl TerminalState {
    /// One frame of the animation driver, minus drawing.
    ///
    /// Fires due timers, advances the glitch line, cursor blink and logo
    /// frame, then evaluates the phase countdowns.
    pub fn tick<R: Rng>(
        &mut self,
        now: Instant,
        canvas_height: f64,
        rng: &mut R,
    ) -> Option<PhaseSignal> {
        self.run_timers(now);
        self.update_animation(now, canvas_height, rng);
        self.evaluate_phase(now)
    }

    /// Advance the time-driven visual fields to `now`.
    pub fn update_animation<R: Rng>(&mut self, now: Instant, canvas_height: f64, rng: &mut R) {
        let delta = now
            .saturating_duration_since(self.last_glitch_update)
            .as_secs_f64();
        self.last_glitch_update = now;

        self.glitch_y += self.settings.glitch_speed * delta;
        if rng.gen::<f64>() < GLITCH_TELEPORT_CHANCE {
            self.glitch_y = rng.gen::<f64>() * canvas_height;
        }
        if canvas_height > 0.0 && self.glitch_y >= canvas_height {
            self.glitch_y %= canvas_height;
        }

        self.cursor_timer += delta;
        if self.cursor_timer >= CURSOR_PERIOD_SECS {
            self.cursor_visible = !self.cursor_visible;
            self.cursor_timer = 0.0;
        }

        self.frame_index = self.frame_at(now);
    }

    /// Logo frame for `now`: elapsed time over the frame delay, modulo the
    /// frame count.
    pub fn frame_at(&self, now: Instant) -> u32 {
        let elapsed_ms = self.elapsed(now).as_millis();
        let delay_ms = self.settings.frame_delay.as_millis().max(1);
        ((elapsed_ms / delay_ms) % u128::from(self.settings.total_frames.max(1))) as u32
    }

    /// Check both countdowns.
    ///
    /// An elapsed boot countdown moves to post-boot. An elapsed post-boot
    /// countdown is reported on every call until the driver acts on it.
    pub fn evaluate_phase(&mut self, now: Instant) -> Option<PhaseSignal> {
        match self.phase {
            Phase::Boot => {
                let due = self.boot_end.is_some_and(|end| now >= end);
                (due && self.transition_to_post_boot(now)).then_some(PhaseSignal::EnteredPostBoot)
            }
            Phase::PostBoot => self
                .post_boot_end
                .filter(|end| now >= *end)
                .map(|_| PhaseSignal::PostBootExpired),
        }
    }
}
