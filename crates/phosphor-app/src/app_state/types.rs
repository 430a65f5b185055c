//! Internal types and constants for the app state module.

use std::time::Duration;

use phosphor_remote::{CommandReply, RemoteError};

/// Results sent back from the command runtime.
#[derive(Debug)]
pub(super) enum CommandEvent {
    Resolved {
        id: u64,
        command: String,
        outcome: Result<CommandReply, RemoteError>,
    },
}

/// Deferred work owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AppTimer {
    Relayout,
    ClearAlert,
}

/// Frame interval while the window is unfocused or hidden.
pub(super) const UNFOCUSED_FRAME_INTERVAL: Duration = Duration::from_millis(1000);

/// How long a config error stays on screen.
pub(super) const ALERT_DURATION: Duration = Duration::from_secs(5);
