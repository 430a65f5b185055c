//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use phosphor_renderer::{Compositor, LogoImages};

use super::core::PhosphorApp;

impl PhosphorApp {
    /// Create the window and the compositor.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("phosphor")
            .with_inner_size(LogicalSize::new(self.args.width, self.args.height));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let logo = LogoImages::load(
            self.args.assets.as_deref(),
            self.store.config().terminal.total_frames,
        );

        let compositor = pollster::block_on(Compositor::new(
            window.clone(),
            self.store.config(),
            &logo,
            self.args.fonts.as_deref(),
            &mut self.rng,
        ));

        match compositor {
            Ok(mut compositor) => {
                compositor.apply_config(self.store.config(), self.store.revision());
                self.compositor = Some(compositor);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        self.update_ime();
        self.start_command_runtime();
        tracing::info!("Window initialized");
        true
    }
}
