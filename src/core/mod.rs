pub mod cache;
pub mod engine;
pub mod format;
pub mod locale;
pub mod rates;
pub mod registry;

pub use crate::domain::model::{
    CacheStatus, ConversionResult, Currency, ExchangeRate, RateOrigin, Region, SymbolPosition,
};
pub use crate::domain::ports::{ConfigProvider, RateProvider};
pub use crate::utils::error::Result;
