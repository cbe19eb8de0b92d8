//! Configuration types for the scrape and download run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the page-expansion and extraction phases.
///
/// These are treated as fixed external input for a run, not CLI flags.
/// They can be overridden through the TOML config file (see
/// [`AppConfig::load`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// URL of the episode archive page.
    pub page_url: String,
    /// Address of the WebDriver server the browser session connects through.
    pub webdriver_url: String,
    /// CSS selector for the "load more" control.
    pub load_more_selector: String,
    /// CSS selector for the per-episode download links.
    pub item_selector: String,
    /// Attribute on an item element holding the download URL.
    pub link_attribute: String,
    /// Attribute on an item element holding the JSON-encoded metadata payload.
    pub metadata_attribute: String,
    /// Delay between load-more clicks, giving the page time to append items.
    pub load_more_delay_ms: u64,
    /// Maximum consecutive iterations without new items before giving up.
    pub load_more_max_attempts: u32,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_url: "https://www.cartalk.com/radio/episodes".to_string(),
            webdriver_url: "http://localhost:9515".to_string(),
            load_more_selector: "button.options__load-more".to_string(),
            item_selector: "a.audio-tool-download".to_string(),
            link_attribute: "href".to_string(),
            metadata_attribute: "data-metrics-ga4".to_string(),
            load_more_delay_ms: 2000,
            load_more_max_attempts: 5,
        }
    }
}

/// Path configuration for download and config directories.
#[derive(Debug, Clone)]
pub struct PathConfig {
    /// Directory where downloaded episodes are saved.
    pub download_dir: PathBuf,
    /// Directory where the configuration file is read from.
    pub config_dir: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            download_dir: data_dir.join("cartalk-dl"),
            config_dir: config_dir.join("cartalk-dl"),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Scrape configuration.
    pub scrape: ScrapeConfig,
    /// Path configuration.
    pub paths: PathConfig,
}

/// On-disk layout of the config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    scrape: ScrapeConfig,
}

impl AppConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration, reading `config.toml` from the platform config
    /// directory when present and falling back to the defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn load() -> crate::Result<Self> {
        let paths = PathConfig::default();
        let file = paths.config_dir.join("config.toml");
        if !file.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&file)?;
        let parsed: ConfigFile = toml::from_str(&contents)
            .map_err(|e| crate::Error::Config(format!("{}: {e}", file.display())))?;
        Ok(Self {
            scrape: parsed.scrape,
            paths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scrape_config() {
        let config = ScrapeConfig::default();
        assert_eq!(config.link_attribute, "href");
        assert_eq!(config.load_more_delay_ms, 2000);
        assert_eq!(config.load_more_max_attempts, 5);
        assert!(config.page_url.starts_with("https://"));
    }

    #[test]
    fn scrape_config_round_trips_through_toml() {
        let config = ScrapeConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: ScrapeConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.page_url, config.page_url);
        assert_eq!(deserialized.item_selector, config.item_selector);
        assert_eq!(deserialized.load_more_delay_ms, config.load_more_delay_ms);
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let parsed: ConfigFile = toml::from_str(
            r#"
            [scrape]
            page_url = "https://example.com/archive"
            load_more_max_attempts = 9
            "#,
        )
        .unwrap();
        assert_eq!(parsed.scrape.page_url, "https://example.com/archive");
        assert_eq!(parsed.scrape.load_more_max_attempts, 9);
        // Untouched fields fall back to the compiled-in defaults
        assert_eq!(parsed.scrape.link_attribute, "href");
    }

    #[test]
    fn default_path_config() {
        let config = PathConfig::default();
        assert!(config.download_dir.to_string_lossy().contains("cartalk-dl"));
        assert!(config.config_dir.to_string_lossy().contains("cartalk-dl"));
    }
}
