//! Debounced structural relayout.
//!
//! The swapchain follows every resize at once. Rebuilding the offscreen
//! surfaces waits for the window to settle, except for the very first
//! resize and for orientation flips, which relayout immediately and then
//! once more after a longer delay.

use std::time::{Duration, Instant};

use winit::dpi::PhysicalSize;

use super::core::PhosphorApp;
use super::types::AppTimer;

/// Quiet period after an ordinary resize.
pub(super) const RESIZE_QUIET: Duration = Duration::from_millis(100);
/// Second relayout after the first resize.
pub(super) const FIRST_RESIZE_SETTLE: Duration = Duration::from_millis(300);
/// Second relayout after an orientation change.
pub(super) const ORIENTATION_SETTLE: Duration = Duration::from_millis(500);

/// What to do about one resize event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ResizePlan {
    pub apply_now: bool,
    /// Delay of the (re)scheduled relayout. Replaces any pending one.
    pub settle_after: Duration,
}

#[derive(Debug, Default)]
pub(super) struct ResizeDebouncer {
    seen_first: bool,
    portrait: Option<bool>,
}

impl ResizeDebouncer {
    pub fn on_resize(&mut self, portrait: bool) -> ResizePlan {
        let flipped = self.portrait.is_some_and(|p| p != portrait);
        self.portrait = Some(portrait);

        if !self.seen_first {
            self.seen_first = true;
            ResizePlan {
                apply_now: true,
                settle_after: FIRST_RESIZE_SETTLE,
            }
        } else if flipped {
            self.on_orientation_change()
        } else {
            ResizePlan {
                apply_now: false,
                settle_after: RESIZE_QUIET,
            }
        }
    }

    pub fn on_orientation_change(&mut self) -> ResizePlan {
        ResizePlan {
            apply_now: true,
            settle_after: ORIENTATION_SETTLE,
        }
    }
}

impl PhosphorApp {
    pub(super) fn handle_resized(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
        if let Some(ref mut compositor) = self.compositor {
            compositor.resize_surface(size.width, size.height, scale);
        }
        let plan = self.resize.on_resize(size.width < size.height);
        tracing::debug!(
            width = size.width,
            height = size.height,
            apply_now = plan.apply_now,
            "Window resized"
        );
        self.follow_plan(plan);
    }

    pub(super) fn handle_scale_factor_changed(&mut self, scale_factor: f64) {
        if let (Some(window), Some(compositor)) = (self.window.as_ref(), self.compositor.as_mut()) {
            let size = window.inner_size();
            compositor.resize_surface(size.width.max(1), size.height.max(1), scale_factor);
        }
        tracing::info!(scale_factor, "Scale factor changed");
        let plan = self.resize.on_orientation_change();
        self.follow_plan(plan);
    }

    fn follow_plan(&mut self, plan: ResizePlan) {
        let now = Instant::now();
        if plan.apply_now {
            self.apply_layout();
        }
        if let Some(id) = self.relayout_timer.take() {
            self.timers.cancel(id);
        }
        self.relayout_timer = Some(
            self.timers
                .schedule(now + plan.settle_after, AppTimer::Relayout),
        );
        self.request_redraw();
    }

    /// Structural relayout: recompute the layout and rebuild both surfaces.
    pub(super) fn apply_layout(&mut self) {
        let Some(ref mut compositor) = self.compositor else {
            return;
        };
        compositor.apply_layout(self.store.config());
        self.update_ime();
    }

    /// Allow IME input (and with it the on-screen keyboard) on narrow or
    /// portrait layouts.
    pub(super) fn update_ime(&self) {
        if let (Some(window), Some(compositor)) = (self.window.as_ref(), self.compositor.as_ref()) {
            let layout = compositor.layout();
            window.set_ime_allowed(layout.is_portrait || layout.is_mobile);
        }
    }
}
