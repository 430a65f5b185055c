mod app_state;
mod cli;
mod opener;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%location, "panic: {payload}");
        default_hook(info);
    }));
}

fn main() -> ExitCode {
    let args = cli::parse();

    // RUST_LOG wins over --log-level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    install_panic_hook();

    tracing::info!("phosphor v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = phosphor_config::load_startup(&args.config);
    if let Some(ref endpoint) = args.endpoint {
        tracing::info!("Using endpoint override: {endpoint}");
        config.api.endpoint = endpoint.clone();
    }

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::PhosphorApp::new(config, args);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    app.exit_code()
}
