//! Gomoku GUI
//!
//! Two players on one machine. An optional TOML config path may be passed
//! as the first argument; otherwise `gomoku.toml` is used if present.

use std::path::PathBuf;

use gomoku::config::{AppConfig, DEFAULT_CONFIG_PATH};
use gomoku::ui::GomokuApp;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Config is read before logging is up, so report problems afterwards
    let loaded = AppConfig::load_or_default(&path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    if let Err(e) = &loaded {
        error!(error = %e, "invalid config, using defaults");
    }
    info!(title = %config.title, "starting Gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([720.0, 540.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
