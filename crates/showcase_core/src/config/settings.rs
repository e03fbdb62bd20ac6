//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field has a serde default so a partial or missing file still
//! yields a complete configuration.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Club site locations (feed origin, profile links).
    #[serde(default)]
    pub site: SiteSettings,

    /// Works-feed retrieval settings.
    #[serde(default)]
    pub feed: FeedSettings,

    /// Showcase presentation settings.
    #[serde(default)]
    pub showcase: ShowcaseSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the club site lives. Profile and on-site links are resolved
/// against this base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site origin without a trailing slash.
    #[serde(default = "default_site_base")]
    pub base_url: String,
}

fn default_site_base() -> String {
    "https://utvpc.club".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: default_site_base(),
        }
    }
}

/// Works-feed retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSettings {
    /// Path of the works list on the site.
    #[serde(default = "default_works_path")]
    pub works_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_works_path() -> String {
    "/works_list.json".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            works_path: default_works_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Showcase presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseSettings {
    /// Card cap for the compact preview strip.
    #[serde(default = "default_compact_cap")]
    pub compact_cap: usize,
}

fn default_compact_cap() -> usize {
    8
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            compact_cap: default_compact_cap(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.feed.works_path, "/works_list.json");
        assert_eq!(settings.showcase.compact_cap, 8);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [site]
            base_url = "http://localhost:8080"
            "#,
        )
        .unwrap();
        assert_eq!(settings.site.base_url, "http://localhost:8080");
        assert_eq!(settings.feed.timeout_secs, 30);
    }
}
