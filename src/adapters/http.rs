use crate::domain::ports::{ConfigProvider, RateProvider};
use crate::utils::error::{FxError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Fetches `{ "rates": { CODE: number } }` from a fixed endpoint.
///
/// The endpoint already encodes its base currency (for example
/// `.../latest/USD`); `base` is only used for error reporting.
pub struct HttpRateProvider {
    client: Client,
    endpoint: String,
}

impl HttpRateProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.rate_endpoint(), config.request_timeout())
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_rates(&self, base: &str) -> Result<HashMap<String, f64>> {
        tracing::debug!("Requesting rates from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Rate source response status: {}", status);
        if !status.is_success() {
            return Err(FxError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: RatesResponse =
            serde_json::from_str(&body).map_err(|e| FxError::InvalidResponse {
                message: e.to_string(),
            })?;

        if parsed.rates.is_empty() {
            return Err(FxError::EmptyRates {
                base: base.to_string(),
            });
        }

        Ok(parsed.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn provider(server: &MockServer) -> HttpRateProvider {
        HttpRateProvider::new(server.url("/latest/USD"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_rates_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/USD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "base": "USD",
                    "date": "2024-01-01",
                    "rates": { "USD": 1, "EUR": 0.92, "XAF": 603.5 }
                }));
        });

        let rates = provider(&server).fetch_rates("USD").await.unwrap();

        mock.assert();
        assert_eq!(rates.len(), 3);
        assert_eq!(rates["EUR"], 0.92);
    }

    #[tokio::test]
    async fn test_fetch_rates_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest/USD");
            then.status(503);
        });

        let err = provider(&server).fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, FxError::HttpStatus { status: 503 }));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_fetch_rates_wrong_shape() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest/USD");
            then.status(200).json_body(serde_json::json!({ "data": [1, 2, 3] }));
        });

        let err = provider(&server).fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, FxError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_rates_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest/USD");
            then.status(200).json_body(serde_json::json!({ "rates": {} }));
        });

        let err = provider(&server).fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, FxError::EmptyRates { .. }));
    }

    #[tokio::test]
    async fn test_fetch_rates_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest/USD");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(serde_json::json!({ "rates": { "EUR": 0.9 } }));
        });

        let provider =
            HttpRateProvider::new(server.url("/latest/USD"), Duration::from_millis(100)).unwrap();
        let err = provider.fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, FxError::Http(_)));
    }
}
