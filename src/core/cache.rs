//! Exchange-rate cache with a single fetch timestamp and TTL.

use crate::domain::model::{CacheStatus, ExchangeRate, RateOrigin};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

pub fn cache_key(from: &str, to: &str) -> String {
    format!("{}-{}", from, to)
}

#[derive(Debug, Default)]
struct CacheState {
    rates: HashMap<String, ExchangeRate>,
    last_fetch: Option<DateTime<Utc>>,
    origin: Option<RateOrigin>,
}

/// Directional rate entries keyed by `FROM-TO`.
///
/// Freshness is tracked for the whole table, not per entry: every fetch cycle
/// restamps `last_fetch`. Live cycles replace the content en masse.
pub struct RateCache {
    state: RwLock<CacheState>,
    ttl: Duration,
}

impl RateCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            ttl,
        }
    }

    pub fn get(&self, from: &str, to: &str) -> Option<ExchangeRate> {
        let state = self.state.read();
        let hit = state.rates.get(&cache_key(from, to)).cloned();
        debug!(from, to, hit = hit.is_some(), "Rate cache lookup");
        hit
    }

    /// True while `now - last_fetch <= ttl`. An empty cache is never fresh.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        let state = self.state.read();
        state
            .last_fetch
            .map(|fetched| now.signed_duration_since(fetched) <= self.ttl)
            .unwrap_or(false)
    }

    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Utc::now())
    }

    /// Swaps in a complete table from one fetch cycle.
    pub fn replace(
        &self,
        rates: HashMap<String, ExchangeRate>,
        origin: RateOrigin,
        fetched_at: DateTime<Utc>,
    ) {
        let mut state = self.state.write();
        state.rates = rates;
        state.last_fetch = Some(fetched_at);
        state.origin = Some(origin);
    }

    /// Writes `rates` over the current entries; keys absent from `rates` keep
    /// their previous value. Restamps the table like [`RateCache::replace`].
    pub fn merge(
        &self,
        rates: HashMap<String, ExchangeRate>,
        origin: RateOrigin,
        fetched_at: DateTime<Utc>,
    ) {
        let mut state = self.state.write();
        state.rates.extend(rates);
        state.last_fetch = Some(fetched_at);
        state.origin = Some(origin);
    }

    pub fn clear(&self) {
        let mut state = self.state.write();
        state.rates.clear();
        state.last_fetch = None;
        state.origin = None;
    }

    pub fn status(&self) -> CacheStatus {
        let now = Utc::now();
        let state = self.state.read();
        let is_expired = state
            .last_fetch
            .map(|fetched| now.signed_duration_since(fetched) > self.ttl)
            .unwrap_or(true);
        CacheStatus {
            size: state.rates.len(),
            last_fetch: state.last_fetch,
            is_expired,
            origin: state.origin,
        }
    }
}
