use crate::config::{
    FxSettings, DEFAULT_CACHE_TTL_SECS, DEFAULT_RATE_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::core::engine::DEFAULT_BASE_CURRENCY;
use crate::utils::error::{FxError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration:
///
/// ```toml
/// [rates]
/// endpoint = "https://api.exchangerate-api.com/v4/latest/USD"
/// base_currency = "USD"
/// cache_ttl_secs = 3600
/// request_timeout_secs = 5
///
/// [logging]
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub rates: RatesConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesConfig {
    pub endpoint: Option<String>,
    pub base_currency: Option<String>,
    pub cache_ttl_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FxError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left
    /// as written so validation reports them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FxError::ConfigParse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().map(|l| l.json).unwrap_or(false)
    }

    pub fn settings(&self) -> FxSettings {
        FxSettings {
            rate_endpoint: self
                .rates
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_RATE_ENDPOINT.to_string()),
            base_currency: self
                .rates
                .base_currency
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string()),
            cache_ttl_secs: self.rates.cache_ttl_secs.unwrap_or(DEFAULT_CACHE_TTL_SECS),
            request_timeout_secs: self
                .rates
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()
    }
}
