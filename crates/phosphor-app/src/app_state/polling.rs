//! Event loop scheduling: driver timers, command replies and frame pacing.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::PhosphorApp;
use super::types::{AppTimer, UNFOCUSED_FRAME_INTERVAL};

impl PhosphorApp {
    /// Run due work and schedule the next wake-up.
    ///
    /// Focused windows redraw every frame (vsync paced). Unfocused or
    /// hidden windows draw about once per second, waking early only for
    /// driver timers.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if self.poll_commands() {
            self.request_redraw();
        }
        self.run_app_timers(now);

        if !self.throttled() {
            self.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
            return;
        }

        let next_frame = self.last_frame + UNFOCUSED_FRAME_INTERVAL;
        if now >= next_frame {
            self.request_redraw();
        }
        let wake = self
            .timers
            .next_deadline()
            .map_or(next_frame, |deadline| deadline.min(next_frame))
            .max(now);
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    fn run_app_timers(&mut self, now: Instant) {
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                AppTimer::Relayout => {
                    self.relayout_timer = None;
                    tracing::debug!("Debounced relayout");
                    self.apply_layout();
                    self.request_redraw();
                }
                AppTimer::ClearAlert => {
                    self.clear_alert();
                    self.request_redraw();
                }
            }
        }
    }
}
