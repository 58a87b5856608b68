use crate::utils::error::{FxError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FxError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Three uppercase ASCII letters. Registration is not required here; the
/// engine resolves unregistered codes to its documented fallbacks.
pub fn validate_currency_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        return Ok(());
    }
    Err(FxError::InvalidConfigValue {
        field: field_name.to_string(),
        value: code.to_string(),
        reason: "Currency code must be three uppercase letters".to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("rates.endpoint", "https://example.com/latest/USD").is_ok());
        assert!(validate_url("rates.endpoint", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("rates.endpoint", "").is_err());
        assert!(validate_url("rates.endpoint", "invalid-url").is_err());
        assert!(validate_url("rates.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("base_currency", "USD").is_ok());
        assert!(validate_currency_code("base_currency", "usd").is_err());
        assert!(validate_currency_code("base_currency", "US").is_err());
        assert!(validate_currency_code("base_currency", "USDT").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_secs", 5u64, 1, 120).is_ok());
        let err = validate_range("timeout_secs", 0u64, 1, 120).unwrap_err();
        assert!(err.to_string().contains("between 1 and 120"));
    }
}
