//! Works Showcase - Main entry point
//!
//! Handles configuration loading, logging initialization, and the
//! application launch.

use std::path::PathBuf;

use showcase_core::config::ConfigManager;
use showcase_core::logging;

mod app;
mod messages;
mod model;
mod roster;
mod theme;
mod update;
mod view;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for the logging level)
    let mut config_manager = ConfigManager::new(default_config_path());
    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    logging::init_tracing(config_manager.settings().logging.level);

    tracing::info!("Works Showcase starting");
    tracing::info!("Config: {}", config_manager.path().display());
    tracing::info!("Core version: {}", showcase_core::version());
    tracing::info!(
        "Works feed: {}{}",
        config_manager.settings().site.base_url,
        config_manager.settings().feed.works_path
    );

    app::run(config_manager.settings().clone())
}
