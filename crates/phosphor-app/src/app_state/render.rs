//! One tick of the animation driver.

use std::time::Instant;

use phosphor_terminal::PhaseSignal;

use super::core::PhosphorApp;
use crate::opener;

impl PhosphorApp {
    /// Advance the terminal, react to phase changes and draw.
    pub(super) fn render_frame(&mut self) {
        let now = Instant::now();
        self.last_frame = now;

        let Some(canvas_height) = self
            .compositor
            .as_ref()
            .map(|c| c.layout().viewport_height)
        else {
            return;
        };

        match self.terminal.tick(now, canvas_height, &mut self.rng) {
            Some(PhaseSignal::EnteredPostBoot) => {
                tracing::info!("Boot countdown elapsed, entering post-boot phase");
                self.update_ime();
            }
            Some(PhaseSignal::PostBootExpired) => {
                self.post_boot_expired();
                if self.should_exit {
                    return;
                }
            }
            None => {}
        }

        let full_logging = self.store.config().debugging.full_console_logging;
        if full_logging {
            tracing::info!(
                phase = ?self.terminal.phase(),
                glitch_y = self.terminal.glitch_y(),
                frame = self.terminal.frame_index(),
                "tick"
            );
        }

        let Some(ref mut compositor) = self.compositor else {
            return;
        };
        match compositor.render(
            &self.terminal,
            self.store.config(),
            now,
            self.alert.as_deref(),
            &mut self.rng,
        ) {
            Ok(Some(limit)) => self.terminal.set_scroll_limit(limit),
            Ok(None) => {}
            Err(e) => tracing::error!("Render error: {e}"),
        }

        self.frame_timer.begin_frame(now);
        if let Some(fps) = self.frame_timer.report_due(now) {
            if full_logging {
                tracing::info!(
                    "Frame rate: {:.1} fps ({:.2} ms)",
                    fps,
                    self.frame_timer.frame_time_ms()
                );
            }
        }
    }

    /// The post-boot countdown ran out: restart in dev mode, otherwise
    /// open the access URL and quit.
    fn post_boot_expired(&mut self) {
        if self.args.dev {
            tracing::info!("Post-boot countdown elapsed, restarting (dev mode)");
            self.restart_terminal();
            return;
        }
        let url = &self.store.config().ui.access_button.url;
        tracing::info!(url = %url, "Post-boot countdown elapsed, redirecting");
        if let Err(e) = opener::open_url(url) {
            tracing::warn!("Failed to open {url}: {e}");
        }
        self.should_exit = true;
    }
}
