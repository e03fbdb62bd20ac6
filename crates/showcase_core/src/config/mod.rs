//! Configuration management for Works Showcase.
//!
//! TOML-based configuration with logical sections, atomic file writes
//! (write to temp, then rename), and defaults applied on load.
//!
//! # Example
//!
//! ```no_run
//! use showcase_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Feed: {}{}",
//!     config.settings().site.base_url,
//!     config.settings().feed.works_path);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{FeedSettings, LoggingSettings, Settings, ShowcaseSettings, SiteSettings};
