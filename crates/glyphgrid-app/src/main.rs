mod app_state;
mod cli;
mod document;
mod input;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use glyphgrid_config::GlyphgridConfig;

use crate::document::Document;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- glyphgrid crashed ---");
        eprintln!("Run with RUST_LOG=glyphgrid=debug for more detail.");
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| cli::DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
    )
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging starts before the config is read so loader messages are kept;
    // the filter is swapped for the configured level afterwards.
    let log_directive = cli::log_directive(args.log_level.as_deref(), None);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&log_directive))
        .with_filter_reloading();
    let filter_handle = subscriber.reload_handle();
    subscriber.init();

    tracing::info!("glyphgrid v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = glyphgrid_config::load_config(args.config.as_deref().map(Path::new))
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            GlyphgridConfig::default()
        });

    if let Some(directive) =
        cli::configured_log_directive(args.log_level.as_deref(), config.logging.level)
    {
        if let Err(e) = filter_handle.reload(env_filter(&directive)) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }

    if let Err(e) = args.apply_overrides(&mut config) {
        tracing::warn!("Ignoring command-line overrides: {e}");
    }
    tracing::info!(
        "Config loaded (max_glyphs: {}, zoom: {})",
        config.buffer.max_glyphs,
        config.viewport.initial_zoom
    );

    let document = match args.file.as_deref() {
        Some(path) => match Document::load(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!("Failed to open document: {e}");
                std::process::exit(1);
            }
        },
        None => Document::Sample,
    };

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::GlyphgridApp::new(config, document);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
