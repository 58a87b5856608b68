//! Building complete rate tables for the cache: live tables derived from one
//! base-currency quote, and the fallback table used when the source is down.

use crate::core::cache::cache_key;
use crate::domain::model::{ExchangeRate, RateOrigin};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::warn;

/// Approximate rates installed when the rate source cannot be reached.
pub const FALLBACK_RATES: &[(&str, &str, f64)] = &[
    ("USD", "XAF", 600.0),
    ("EUR", "XAF", 650.0),
    ("GBP", "XAF", 750.0),
    ("USD", "NGN", 800.0),
    ("USD", "ZAR", 18.0),
    ("USD", "KES", 150.0),
    ("USD", "GHS", 12.0),
    ("USD", "EUR", 0.85),
    ("USD", "GBP", 0.75),
    ("USD", "CAD", 1.35),
    ("USD", "AUD", 1.50),
    ("USD", "JPY", 150.0),
    ("USD", "CNY", 7.2),
    ("USD", "INR", 83.0),
];

type RateTable = HashMap<String, ExchangeRate>;

fn insert(
    table: &mut RateTable,
    from: &str,
    to: &str,
    rate: f64,
    origin: RateOrigin,
    at: DateTime<Utc>,
) {
    table.insert(
        cache_key(from, to),
        ExchangeRate {
            from: from.to_string(),
            to: to.to_string(),
            rate,
            last_updated: at,
            origin,
        },
    );
}

/// Expands `quotes` (units of X per one `base`) into every directional pair:
/// `base-X`, `X-base` and the cross-rates `A-B` composed through the base.
///
/// Non-finite and non-positive quotes are dropped, as is a quote for the base
/// itself.
pub fn live_table(base: &str, quotes: &HashMap<String, f64>, at: DateTime<Utc>) -> RateTable {
    let mut usable: Vec<(&str, f64)> = quotes
        .iter()
        .filter_map(|(code, &rate)| {
            if code == base {
                return None;
            }
            if !rate.is_finite() || rate <= 0.0 {
                warn!(code = %code, rate, "Dropping unusable quote");
                return None;
            }
            Some((code.as_str(), rate))
        })
        .collect();
    usable.sort_by(|a, b| a.0.cmp(b.0));

    let n = usable.len();
    let mut table = RateTable::with_capacity(n * (n + 1));

    for &(code, rate) in &usable {
        insert(&mut table, base, code, rate, RateOrigin::Live, at);
        insert(&mut table, code, base, 1.0 / rate, RateOrigin::Live, at);
    }

    for &(from, from_rate) in &usable {
        let to_base = 1.0 / from_rate;
        for &(to, to_rate) in &usable {
            if from != to {
                insert(&mut table, from, to, to_base * to_rate, RateOrigin::Live, at);
            }
        }
    }

    table
}

/// The fallback pairs and their inverses. Nothing else is derived.
pub fn fallback_table(at: DateTime<Utc>) -> RateTable {
    let mut table = RateTable::with_capacity(FALLBACK_RATES.len() * 2);
    for &(from, to, rate) in FALLBACK_RATES {
        insert(&mut table, from, to, rate, RateOrigin::Fallback, at);
        insert(&mut table, to, from, 1.0 / rate, RateOrigin::Fallback, at);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quotes() -> HashMap<String, f64> {
        HashMap::from([
            ("USD".to_string(), 1.0),
            ("EUR".to_string(), 0.9),
            ("XAF".to_string(), 590.0),
            ("GBP".to_string(), 0.8),
        ])
    }

    #[test]
    fn test_live_table_direct_and_inverse() {
        let table = live_table("USD", &quotes(), Utc::now());

        assert_relative_eq!(table["USD-EUR"].rate, 0.9);
        assert_relative_eq!(table["EUR-USD"].rate, 1.0 / 0.9);
        assert!(!table.contains_key("USD-USD"));
    }

    #[test]
    fn test_live_table_cross_rates() {
        let table = live_table("USD", &quotes(), Utc::now());

        // 3 non-base codes: 3 direct + 3 inverse + 3*2 cross
        assert_eq!(table.len(), 12);
        assert_relative_eq!(table["EUR-XAF"].rate, 590.0 / 0.9, max_relative = 1e-12);
        assert_relative_eq!(
            table["EUR-GBP"].rate * table["GBP-EUR"].rate,
            1.0,
            max_relative = 1e-12
        );
        assert!(table.values().all(|r| r.origin == RateOrigin::Live));
    }

    #[test]
    fn test_live_table_drops_bad_quotes() {
        let mut q = quotes();
        q.insert("BAD".to_string(), 0.0);
        q.insert("NAN".to_string(), f64::NAN);
        q.insert("NEG".to_string(), -3.0);

        let table = live_table("USD", &q, Utc::now());

        assert!(table.keys().all(|k| !k.contains("BAD") && !k.contains("NAN") && !k.contains("NEG")));
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn test_fallback_table() {
        let table = fallback_table(Utc::now());

        assert_eq!(table.len(), FALLBACK_RATES.len() * 2);
        assert_relative_eq!(table["USD-XAF"].rate, 600.0);
        assert_relative_eq!(table["XAF-USD"].rate, 1.0 / 600.0);
        assert_relative_eq!(table["EUR-XAF"].rate, 650.0);
        assert!(!table.contains_key("EUR-GBP"));
        assert!(table.values().all(|r| r.origin == RateOrigin::Fallback));
    }
}
