//! The conversion engine: rate lookup through the cache, fetch cycles with
//! fallback, and amount conversion.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, instrument, warn};

use crate::adapters::http::HttpRateProvider;
use crate::core::cache::RateCache;
use crate::core::rates::{fallback_table, live_table};
use crate::domain::model::{CacheStatus, ConversionResult, ExchangeRate, RateOrigin};
use crate::domain::ports::{ConfigProvider, RateProvider};
use crate::utils::error::{FxError, Result};

pub const DEFAULT_BASE_CURRENCY: &str = "USD";

pub struct CurrencyEngine {
    provider: Arc<dyn RateProvider>,
    cache: RateCache,
    base_currency: String,
}

impl CurrencyEngine {
    pub fn new(
        provider: Arc<dyn RateProvider>,
        base_currency: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache: RateCache::new(ttl),
            base_currency: base_currency.into(),
        }
    }

    /// Engine backed by the HTTP rate source described by `config`.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let provider = HttpRateProvider::from_config(config)?;
        let ttl =
            Duration::from_std(config.cache_ttl()).map_err(|e| FxError::InvalidConfigValue {
                field: "cache_ttl".to_string(),
                value: format!("{:?}", config.cache_ttl()),
                reason: e.to_string(),
            })?;
        Ok(Self::new(Arc::new(provider), config.base_currency(), ttl))
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Rate for `from -> to`. Never fails: the result is a cached, freshly
    /// fetched or fallback rate, or an identity rate tagged
    /// [`RateOrigin::Unavailable`] when nothing is known about the pair.
    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> ExchangeRate {
        if from == to {
            return self.synthetic_rate(from, to, RateOrigin::Identity);
        }

        if self.cache.is_fresh() {
            if let Some(rate) = self.cache.get(from, to) {
                debug!(from, to, "Using cached rate");
                return rate;
            }
            debug!(from, to, "Pair missing from fresh cache, refetching");
        }

        self.refresh_rates().await;

        self.cache.get(from, to).unwrap_or_else(|| {
            warn!(from, to, "No rate available after refresh, using identity");
            self.synthetic_rate(from, to, RateOrigin::Unavailable)
        })
    }

    /// Runs one fetch cycle regardless of cache freshness and reports which
    /// kind of table ended up in the cache. A live table replaces everything;
    /// the fallback table is written over whatever entries are already there.
    pub async fn refresh_rates(&self) -> RateOrigin {
        let base = self.base_currency.as_str();
        let outcome = self
            .provider
            .fetch_rates(base)
            .await
            .and_then(|quotes| {
                let table = live_table(base, &quotes, Utc::now());
                if table.is_empty() {
                    Err(FxError::EmptyRates {
                        base: base.to_string(),
                    })
                } else {
                    Ok(table)
                }
            });

        let fetched_at = Utc::now();
        match outcome {
            Ok(table) => {
                info!(
                    provider = self.provider.name(),
                    base,
                    pairs = table.len(),
                    "Exchange rates refreshed"
                );
                self.cache.replace(table, RateOrigin::Live, fetched_at);
                RateOrigin::Live
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    base,
                    error = %e,
                    "Failed to fetch exchange rates, merging fallback table"
                );
                self.cache
                    .merge(fallback_table(fetched_at), RateOrigin::Fallback, fetched_at);
                RateOrigin::Fallback
            }
        }
    }

    #[instrument(skip(self), fields(base = %self.base_currency))]
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> ConversionResult {
        let rate = self.get_exchange_rate(from, to).await;
        let converted_amount = if rate.origin == RateOrigin::Identity {
            amount
        } else {
            amount * rate.rate
        };

        let result = ConversionResult {
            amount,
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            converted_amount,
            exchange_rate: rate.rate,
            timestamp: Utc::now(),
            rate_origin: rate.origin,
        };

        debug!(
            converted_amount = result.converted_amount,
            rate = result.exchange_rate,
            origin = %result.rate_origin,
            "Conversion completed"
        );

        result
    }

    /// One rate per target, quoted against `base`. Backs rate boards such as
    /// "1 USD in each popular currency".
    pub async fn rates_against(&self, base: &str, targets: &[&str]) -> Vec<ExchangeRate> {
        let mut rates = Vec::with_capacity(targets.len());
        for target in targets {
            rates.push(self.get_exchange_rate(base, target).await);
        }
        rates
    }

    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }

    /// Empties the cache; the next lookup between distinct currencies fetches.
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("Rate cache cleared");
    }

    fn synthetic_rate(&self, from: &str, to: &str, origin: RateOrigin) -> ExchangeRate {
        ExchangeRate {
            from: from.to_string(),
            to: to.to_string(),
            rate: 1.0,
            last_updated: Utc::now(),
            origin,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory rate source that counts calls and can be switched to fail.
    pub struct MockRateProvider {
        quotes: HashMap<String, f64>,
        failing: AtomicBool,
        calls: AtomicUsize,
    }

    impl MockRateProvider {
        pub fn new(quotes: &[(&str, f64)]) -> Self {
            Self {
                quotes: quotes.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
                failing: AtomicBool::new(false),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            let provider = Self::new(&[]);
            provider.set_failing(true);
            provider
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for MockRateProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_rates(&self, _base: &str) -> Result<HashMap<String, f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(FxError::HttpStatus { status: 503 });
            }
            Ok(self.quotes.clone())
        }
    }
}
