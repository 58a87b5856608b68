pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{toml_config::TomlConfig, FxSettings};

pub use crate::adapters::http::HttpRateProvider;
pub use crate::core::engine::CurrencyEngine;
pub use crate::core::format::{format, format_plain, format_with};
pub use crate::core::registry::{
    default_currency, detect_from_locale, get_currency, is_valid, list_by_region,
    list_by_region_name, list_supported, symbol_for,
};
pub use crate::domain::model::{
    CacheStatus, ConversionResult, Currency, ExchangeRate, RateOrigin, Region, SymbolPosition,
};
pub use crate::domain::ports::{ConfigProvider, RateProvider};
pub use crate::utils::error::{FxError, Result};
