use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate source returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Rate source returned an unexpected body: {message}")]
    InvalidResponse { message: String },

    #[error("Rate source returned no usable rates for base {base}")]
    EmptyRates { base: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl FxError {
    /// Errors that come from talking to the rate source. These never leave the
    /// engine; they select the fallback table instead.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            FxError::Http(_)
                | FxError::HttpStatus { .. }
                | FxError::InvalidResponse { .. }
                | FxError::EmptyRates { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
