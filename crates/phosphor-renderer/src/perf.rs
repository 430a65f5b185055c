//! Frame timing for the optional FPS log.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How often a rolling FPS value is reported.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(1000);

/// Tracks frame durations for FPS calculation.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
    last_report: Option<Instant>,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a 120-sample rolling window.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: None,
            last_report: None,
            max_samples: 120,
        }
    }

    /// Record a frame presented at `now`.
    pub fn begin_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame.replace(now) {
            self.frame_times.push_back(now.saturating_duration_since(last));
            if self.frame_times.len() > self.max_samples {
                self.frame_times.pop_front();
            }
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(Duration::as_secs_f64).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(Duration::as_secs_f64).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// The current FPS once per [`REPORT_INTERVAL`], `None` in between.
    pub fn report_due(&mut self, now: Instant) -> Option<f64> {
        match self.last_report {
            Some(last) if now.saturating_duration_since(last) < REPORT_INTERVAL => None,
            Some(_) => {
                self.last_report = Some(now);
                Some(self.fps())
            }
            None => {
                self.last_report = Some(now);
                None
            }
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
