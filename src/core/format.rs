use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::locale::number_style;
use crate::core::registry;
use crate::domain::model::{Currency, SymbolPosition};

/// Formats `amount` with the display rules of `code`.
///
/// Registered currencies get their locale's separators, exactly
/// `decimal_places` fraction digits and their symbol on the configured side:
/// `$1,234.56`, `1 000 FCFA`. Unknown codes degrade to `"<amount> <code>"`.
pub fn format(amount: f64, code: &str) -> String {
    match registry::get_currency(code) {
        Some(currency) => format_with(amount, currency),
        None => format!("{} {}", plain_number(amount), code),
    }
}

/// The number part of [`format`], without any symbol.
pub fn format_plain(amount: f64, code: &str) -> String {
    match registry::get_currency(code) {
        Some(currency) => localized_number(amount, currency),
        None => plain_number(amount),
    }
}

pub fn format_with(amount: f64, currency: &Currency) -> String {
    let number = localized_number(amount, currency);
    match currency.symbol_position {
        SymbolPosition::Before => format!("{}{}", currency.symbol, number),
        SymbolPosition::After => format!("{} {}", number, currency.symbol),
    }
}

fn localized_number(amount: f64, currency: &Currency) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}∞", sign);
    }

    let style = number_style(currency.locale);
    let fixed = fixed_point(amount.abs(), currency.decimal_places);
    let body = match fixed.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{}{}", style.group(int_part), style.decimal_separator, frac_part)
        }
        None => style.group(&fixed),
    };
    format!("{}{}", sign, style.localize_digits(&body))
}

/// Fixed-point rendering of a non-negative value, rounded half away from zero
/// on its shortest decimal form, so `1.005` renders as `1.01`.
fn fixed_point(value: f64, decimal_places: u32) -> String {
    match Decimal::from_str(&value.to_string()).ok().or_else(|| Decimal::from_f64(value)) {
        Some(decimal) => {
            let mut rounded = decimal
                .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimal_places);
            rounded.to_string()
        }
        // beyond Decimal's range
        None => format!("{:.*}", decimal_places as usize, value),
    }
}

fn plain_number(amount: f64) -> String {
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    amount.to_string()
}
