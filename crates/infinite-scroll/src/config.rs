//! Feed Configuration
//!
//! Tunables for the feed, deserializable from a JSON object whose missing
//! keys fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Anchor must be entirely inside the viewport.
pub const FULL_VISIBILITY: f64 = 1.0;
/// Roughly one frame; long enough for the opacity transition to register.
pub const DEFAULT_FADE_IN_DELAY_MS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    /// Catalog origin; `/products` is appended
    pub base_url: String,
    /// Items requested per fetch
    pub page_size: usize,
    /// Fraction of the sentinel that must be visible to trigger a fetch
    pub threshold: f64,
    /// Suppress scroll-triggered fetches (the initial fetch still runs)
    pub disabled: bool,
    pub fade_in_delay_ms: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            threshold: FULL_VISIBILITY,
            disabled: false,
            fade_in_delay_ms: DEFAULT_FADE_IN_DELAY_MS,
        }
    }
}

impl FeedConfig {
    /// Parse and validate a JSON config object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FeedConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        reqwest::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
