use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// Display metadata for one registered currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub locale: &'static str,
    pub decimal_places: u32,
    pub symbol_position: SymbolPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Africa,
    Europe,
    Americas,
    Asia,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Africa,
        Region::Europe,
        Region::Americas,
        Region::Asia,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "africa",
            Region::Europe => "europe",
            Region::Americas => "americas",
            Region::Asia => "asia",
            Region::Oceania => "oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown region: {}", s))
    }
}

/// Where a rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateOrigin {
    /// Source and target currency are the same.
    Identity,
    /// Fetched from the rate source or derived from that fetch.
    Live,
    /// Hard-coded approximate table, installed after a failed fetch.
    Fallback,
    /// No data for the pair. The rate is 1 and means nothing.
    Unavailable,
}

impl RateOrigin {
    pub fn is_approximate(&self) -> bool {
        matches!(self, RateOrigin::Fallback | RateOrigin::Unavailable)
    }
}

impl fmt::Display for RateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RateOrigin::Identity => "identity",
            RateOrigin::Live => "live",
            RateOrigin::Fallback => "fallback",
            RateOrigin::Unavailable => "unavailable",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub last_updated: DateTime<Utc>,
    pub origin: RateOrigin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub converted_amount: f64,
    pub exchange_rate: f64,
    pub timestamp: DateTime<Utc>,
    pub rate_origin: RateOrigin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatus {
    pub size: usize,
    pub last_fetch: Option<DateTime<Utc>>,
    pub is_expired: bool,
    /// `None` until the first fetch cycle.
    pub origin: Option<RateOrigin>,
}
