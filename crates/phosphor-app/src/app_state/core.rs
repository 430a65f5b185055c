//! PhosphorApp struct definition and constructor.

use std::process::ExitCode;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::ThreadRng;
use winit::window::Window;

use phosphor_config::{ConfigStore, PhosphorConfig};
use phosphor_remote::CommandEndpoint;
use phosphor_renderer::{Compositor, FrameTimer};
use phosphor_terminal::{TerminalSettings, TerminalState, TimerId, TimerQueue};

use super::resize::ResizeDebouncer;
use super::types::{AppTimer, CommandEvent};
use crate::cli::Args;

/// Top-level application state.
pub struct PhosphorApp {
    pub(super) args: Args,
    pub(super) store: ConfigStore,
    pub(super) terminal: TerminalState,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) compositor: Option<Compositor>,

    // Driver timers: debounced relayout and alert expiry
    pub(super) timers: TimerQueue<AppTimer>,
    pub(super) relayout_timer: Option<TimerId>,
    pub(super) alert_timer: Option<TimerId>,
    pub(super) resize: ResizeDebouncer,
    pub(super) alert: Option<String>,

    // Command requests
    pub(super) runtime: Option<tokio::runtime::Runtime>,
    pub(super) endpoint: Option<Arc<dyn CommandEndpoint>>,
    pub(super) command_tx: Sender<CommandEvent>,
    pub(super) command_rx: Receiver<CommandEvent>,

    // Input tracking, physical pixels
    pub(super) cursor_pos: (f64, f64),

    pub(super) focused: bool,
    pub(super) occluded: bool,
    pub(super) last_frame: Instant,
    pub(super) frame_timer: FrameTimer,
    pub(super) rng: ThreadRng,

    pub(super) should_exit: bool,
    pub(super) init_failed: bool,
}

impl PhosphorApp {
    pub fn new(config: PhosphorConfig, args: Args) -> Self {
        let now = Instant::now();
        let store = ConfigStore::new(config);
        let terminal = TerminalState::new(TerminalSettings::from_config(store.config()), now);
        let (command_tx, command_rx) = std::sync::mpsc::channel();
        Self {
            args,
            store,
            terminal,
            window: None,
            compositor: None,
            timers: TimerQueue::new(),
            relayout_timer: None,
            alert_timer: None,
            resize: ResizeDebouncer::default(),
            alert: None,
            runtime: None,
            endpoint: None,
            command_tx,
            command_rx,
            cursor_pos: (0.0, 0.0),
            focused: true,
            occluded: false,
            last_frame: now,
            frame_timer: FrameTimer::new(),
            rng: rand::thread_rng(),
            should_exit: false,
            init_failed: false,
        }
    }

    /// Process exit status once the event loop has returned.
    pub fn exit_code(&self) -> ExitCode {
        if self.init_failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    pub(super) fn config(&self) -> &PhosphorConfig {
        self.store.config()
    }

    /// Whether frames are throttled to [`UNFOCUSED_FRAME_INTERVAL`].
    ///
    /// [`UNFOCUSED_FRAME_INTERVAL`]: super::types::UNFOCUSED_FRAME_INTERVAL
    pub(super) fn throttled(&self) -> bool {
        !self.focused || self.occluded
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
