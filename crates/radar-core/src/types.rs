//! Core types for the radar pipeline
//!
//! Defines:
//! - Pipeline configuration (timeouts, sizing, FAQ link)
//! - Top-level configuration loaded from TOML
//! - The artifact of a successful run

use crate::error::ConfigError;
use radar_ingest::SheetsConfig;
use radar_model::Radar;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides the Sheets API key
pub const API_KEY_ENV: &str = "RADAR_SHEETS_API_KEY";

/// Default FAQ link appended to every failure message
pub const DEFAULT_FAQ_URL: &str =
    "http://pradeepamohan.net/wp-content/uploads/2012/08/olai-chuvadi-300x176.jpg";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Availability check timeout in seconds
    pub availability_timeout_secs: u64,
    /// Describe and fetch timeout in seconds
    pub fetch_timeout_secs: u64,
    /// Height of the page the radar is drawn into
    pub viewport_height: u32,
    /// Smallest radar size in pixels
    pub min_radar_size: u32,
    /// Vertical space taken by surrounding page elements
    pub viewport_chrome: u32,
    /// Link shown in failure messages
    pub faq_url: String,
}

impl PipelineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With availability timeout
    #[inline]
    #[must_use]
    pub fn with_availability_timeout(mut self, secs: u64) -> Self {
        self.availability_timeout_secs = secs;
        self
    }

    /// With fetch timeout
    #[inline]
    #[must_use]
    pub fn with_fetch_timeout(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// With viewport height
    #[inline]
    #[must_use]
    pub fn with_viewport_height(mut self, height: u32) -> Self {
        self.viewport_height = height;
        self
    }

    /// With FAQ link
    #[inline]
    #[must_use]
    pub fn with_faq_url(mut self, url: impl Into<String>) -> Self {
        self.faq_url = url.into();
        self
    }

    /// Pixel size handed to the renderer
    ///
    /// `max(min_radar_size, viewport_height - viewport_chrome)`
    #[inline]
    #[must_use]
    pub fn radar_size(&self) -> u32 {
        self.viewport_height
            .saturating_sub(self.viewport_chrome)
            .max(self.min_radar_size)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            availability_timeout_secs: 30,
            fetch_timeout_secs: 60,
            viewport_height: 900,
            min_radar_size: 620,
            viewport_chrome: 133,
            faq_url: DEFAULT_FAQ_URL.to_string(),
        }
    }
}

/// Top-level configuration
///
/// ```toml
/// [pipeline]
/// fetch_timeout_secs = 20
///
/// [sheets]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Pipeline settings
    pub pipeline: PipelineConfig,
    /// Google Sheets client settings
    pub sheets: SheetsConfig,
}

impl RadarConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text; absent keys take their defaults
    ///
    /// # Errors
    /// `ConfigError::InvalidToml` if the text does not parse.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file, then apply environment overrides
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::InvalidToml`
    /// if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?.with_env_overrides();
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply [`API_KEY_ENV`] from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`; empty values are ignored
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
            self.sheets.api_key = Some(key);
        }
        self
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltRadar {
    /// Spreadsheet display name
    pub title: String,
    /// Tab the radar was read from
    pub sheet_name: String,
    /// Pixel size handed to the renderer
    pub size: u32,
    /// Assembled radar
    pub radar: Radar,
}
