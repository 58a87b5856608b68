#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::engine::DEFAULT_BASE_CURRENCY;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_currency_code, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_RATE_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/USD";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Resolved engine settings, whichever source they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxSettings {
    pub rate_endpoint: String,
    pub base_currency: String,
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for FxSettings {
    fn default() -> Self {
        Self {
            rate_endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ConfigProvider for FxSettings {
    fn rate_endpoint(&self) -> &str {
        &self.rate_endpoint
    }

    fn base_currency(&self) -> &str {
        &self.base_currency
    }

    fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Validate for FxSettings {
    fn validate(&self) -> Result<()> {
        validate_url("rate_endpoint", &self.rate_endpoint)?;
        validate_currency_code("base_currency", &self.base_currency)?;
        // one week
        validate_range("cache_ttl_secs", self.cache_ttl_secs, 0, 7 * 24 * 60 * 60)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 120)?;
        Ok(())
    }
}
