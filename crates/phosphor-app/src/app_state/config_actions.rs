//! Config import/export, debug toggles and restart.

use std::path::Path;
use std::time::Instant;

use phosphor_config::EXPORT_FILE_NAME;
use phosphor_terminal::TerminalSettings;

use super::core::PhosphorApp;
use super::types::{AppTimer, ALERT_DURATION};

impl PhosphorApp {
    pub(super) fn export_config(&mut self) {
        let path = Path::new(EXPORT_FILE_NAME);
        if let Err(e) = self.store.export_file(path) {
            self.show_alert(format!("Export failed: {e}"));
        }
    }

    /// Deep-merge the import file over the live config. A bad document
    /// leaves the previous config in place and raises the alert banner.
    pub(super) fn import_config(&mut self) {
        let path = self.args.import.clone();
        match self.store.import_file(&path) {
            Ok(clamped) => {
                if !clamped.is_empty() {
                    tracing::info!(count = clamped.len(), "Imported config had out-of-range values");
                }
                self.config_changed();
                self.rebuild_endpoint();
            }
            Err(e) => self.show_alert(format!("Config import failed: {e}")),
        }
    }

    pub(super) fn toggle_grid(&mut self) {
        self.store
            .update(|config| config.debugging.show_grid = !config.debugging.show_grid);
        tracing::info!(show_grid = self.store.config().debugging.show_grid, "Grid toggled");
        self.config_changed();
    }

    /// Push the current config revision into the compositor.
    pub(super) fn config_changed(&mut self) {
        let revision = self.store.revision();
        let config = self.store.config();
        if let Some(ref mut compositor) = self.compositor {
            compositor.apply_config(config, revision);
        }
        self.request_redraw();
    }

    /// Full reset: fresh terminal state from the current config, then a
    /// structural relayout.
    pub(super) fn restart_terminal(&mut self) {
        tracing::info!("Restarting terminal");
        self.terminal
            .restart(TerminalSettings::from_config(self.store.config()), Instant::now());
        self.apply_layout();
        self.request_redraw();
    }

    pub(super) fn show_alert(&mut self, message: String) {
        tracing::error!("{message}");
        self.alert = Some(message);
        if let Some(id) = self.alert_timer.take() {
            self.timers.cancel(id);
        }
        self.alert_timer = Some(
            self.timers
                .schedule(Instant::now() + ALERT_DURATION, AppTimer::ClearAlert),
        );
        self.request_redraw();
    }

    pub(super) fn clear_alert(&mut self) {
        self.alert = None;
        self.alert_timer = None;
    }
}
