use crate::domain::model::{Currency, Region, SymbolPosition};
use SymbolPosition::{After, Before};

const fn currency(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    locale: &'static str,
    decimal_places: u32,
    symbol_position: SymbolPosition,
) -> Currency {
    Currency {
        code,
        name,
        symbol,
        locale,
        decimal_places,
        symbol_position,
    }
}

/// Registration order is the listing order.
static CURRENCIES: [Currency; 15] = [
    currency("XAF", "Central African CFA Franc", "FCFA", "fr-CM", 0, After),
    currency("USD", "US Dollar", "$", "en-US", 2, Before),
    currency("EUR", "Euro", "€", "de-DE", 2, After),
    currency("GBP", "British Pound", "£", "en-GB", 2, Before),
    currency("CAD", "Canadian Dollar", "C$", "en-CA", 2, Before),
    currency("AUD", "Australian Dollar", "A$", "en-AU", 2, Before),
    currency("JPY", "Japanese Yen", "¥", "ja-JP", 0, Before),
    currency("CNY", "Chinese Yuan", "¥", "zh-CN", 2, Before),
    currency("INR", "Indian Rupee", "₹", "en-IN", 2, Before),
    currency("NGN", "Nigerian Naira", "₦", "en-NG", 2, Before),
    currency("ZAR", "South African Rand", "R", "en-ZA", 2, Before),
    currency("KES", "Kenyan Shilling", "KSh", "en-KE", 2, Before),
    currency("GHS", "Ghanaian Cedi", "₵", "en-GH", 2, Before),
    currency("MAD", "Moroccan Dirham", "MAD", "ar-MA", 2, After),
    currency("EGP", "Egyptian Pound", "E£", "ar-EG", 2, Before),
];

const DEFAULT_CODE: &str = "XAF";

fn region_codes(region: Region) -> &'static [&'static str] {
    match region {
        Region::Africa => &["XAF", "NGN", "ZAR", "KES", "GHS", "MAD", "EGP"],
        Region::Europe => &["EUR", "GBP"],
        Region::Americas => &["USD", "CAD"],
        Region::Asia => &["JPY", "CNY", "INR"],
        Region::Oceania => &["AUD"],
    }
}

pub fn list_supported() -> &'static [Currency] {
    &CURRENCIES
}

pub fn get_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

pub fn is_valid(code: &str) -> bool {
    get_currency(code).is_some()
}

pub fn list_by_region(region: Region) -> Vec<&'static Currency> {
    let codes = region_codes(region);
    CURRENCIES
        .iter()
        .filter(|c| codes.contains(&c.code))
        .collect()
}

/// String form used by callers holding a raw region name. Unknown names yield
/// an empty list.
pub fn list_by_region_name(region: &str) -> Vec<&'static Currency> {
    region
        .parse::<Region>()
        .map(list_by_region)
        .unwrap_or_default()
}

/// Exact locale first, then the first currency sharing the language subtag.
pub fn detect_from_locale(locale: &str) -> Option<&'static Currency> {
    if let Some(exact) = CURRENCIES.iter().find(|c| c.locale == locale) {
        return Some(exact);
    }
    let language = locale.split('-').next().unwrap_or(locale);
    if language.is_empty() {
        return None;
    }
    CURRENCIES
        .iter()
        .find(|c| c.locale.split('-').next() == Some(language))
}

pub fn symbol_for(code: &str) -> &str {
    get_currency(code).map(|c| c.symbol).unwrap_or(code)
}

pub fn default_currency() -> &'static Currency {
    get_currency(DEFAULT_CODE).unwrap_or(&CURRENCIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_currency() {
        let usd = get_currency("USD").unwrap();
        assert_eq!(usd.symbol, "$");
        assert_eq!(usd.decimal_places, 2);
        assert_eq!(usd.symbol_position, SymbolPosition::Before);

        assert!(get_currency("ZZZ").is_none());
        // exact match only
        assert!(get_currency("usd").is_none());
    }

    #[test]
    fn test_list_supported_keeps_registration_order() {
        let codes: Vec<&str> = list_supported().iter().map(|c| c.code).collect();
        assert_eq!(codes.first(), Some(&"XAF"));
        assert_eq!(codes.last(), Some(&"EGP"));
        assert_eq!(codes.len(), 15);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = list_supported().iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), list_supported().len());
    }

    #[test]
    fn test_list_by_region() {
        let africa: Vec<&str> = list_by_region(Region::Africa).iter().map(|c| c.code).collect();
        assert_eq!(africa, vec!["XAF", "NGN", "ZAR", "KES", "GHS", "MAD", "EGP"]);

        let europe: Vec<&str> = list_by_region_name("Europe").iter().map(|c| c.code).collect();
        assert_eq!(europe, vec!["EUR", "GBP"]);

        assert!(list_by_region_name("atlantis").is_empty());
    }

    #[test]
    fn test_every_region_code_is_registered() {
        for region in Region::ALL {
            for code in region_codes(region) {
                assert!(is_valid(code), "{} in {} is not registered", code, region);
            }
        }
    }

    #[test]
    fn test_detect_from_locale() {
        assert_eq!(detect_from_locale("en-GB").map(|c| c.code), Some("GBP"));
        assert_eq!(detect_from_locale("fr-FR").map(|c| c.code), Some("XAF"));
        assert_eq!(detect_from_locale("en").map(|c| c.code), Some("USD"));
        assert!(detect_from_locale("pt-BR").is_none());
        assert!(detect_from_locale("").is_none());
    }

    #[test]
    fn test_symbol_and_default() {
        assert_eq!(symbol_for("NGN"), "₦");
        assert_eq!(symbol_for("ZZZ"), "ZZZ");
        assert_eq!(default_currency().code, "XAF");
    }
}
