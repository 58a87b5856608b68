use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// A source of exchange rates quoted against one base currency.
///
/// Implementations return `code -> units of code per one unit of base`.
/// Any error is treated by the engine as a fetch failure.
#[async_trait]
pub trait RateProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_rates(&self, base: &str) -> Result<HashMap<String, f64>>;
}

pub trait ConfigProvider: Send + Sync {
    fn rate_endpoint(&self) -> &str;
    fn base_currency(&self) -> &str;
    fn cache_ttl(&self) -> Duration;
    fn request_timeout(&self) -> Duration;
}
