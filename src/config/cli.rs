use crate::config::toml_config::TomlConfig;
use crate::config::FxSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "fx-display")]
#[command(about = "Currency lookup, conversion and formatting")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with a [rates] section
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[arg(long, global = true)]
    pub base_currency: Option<String>,

    #[arg(long, global = true)]
    pub ttl_secs: Option<u64>,

    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List supported currencies
    Currencies {
        /// africa, europe, americas, asia or oceania
        #[arg(long)]
        region: Option<String>,
    },
    /// Convert an amount between two currencies
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        from: String,
        to: String,
    },
    /// Format an amount with a currency's display rules
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        code: String,
    },
    /// Show rates for several currencies against one base
    Rates {
        #[arg(long, default_value = "USD")]
        base: String,
        /// Target codes; defaults to every supported currency
        codes: Vec<String>,
    },
}

impl CliConfig {
    fn file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    pub fn json_logging(&self) -> bool {
        self.log_json
            || self
                .file_config()
                .map(|c| c.json_logging())
                .unwrap_or(false)
    }

    /// File values first, then command-line overrides.
    pub fn settings(&self) -> Result<FxSettings> {
        let mut settings = self.file_config()?.settings();
        if let Some(endpoint) = &self.endpoint {
            settings.rate_endpoint = endpoint.clone();
        }
        if let Some(base) = &self.base_currency {
            settings.base_currency = base.clone();
        }
        if let Some(ttl) = self.ttl_secs {
            settings.cache_ttl_secs = ttl;
        }
        if let Some(timeout) = self.timeout_secs {
            settings.request_timeout_secs = timeout;
        }
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.settings()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = CliConfig::parse_from(["fx-display", "convert", "100", "USD", "XAF"]);
        match &cli.command {
            Command::Convert { amount, from, to } => {
                assert_eq!(*amount, 100.0);
                assert_eq!(from, "USD");
                assert_eq!(to, "XAF");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.settings().unwrap(), FxSettings::default());
    }

    #[test]
    fn test_overrides() {
        let cli = CliConfig::parse_from([
            "fx-display",
            "format",
            "-12.5",
            "EUR",
            "--endpoint",
            "http://localhost:9000/latest/EUR",
            "--base-currency",
            "EUR",
            "--ttl-secs",
            "60",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.rate_endpoint, "http://localhost:9000/latest/EUR");
        assert_eq!(settings.base_currency, "EUR");
        assert_eq!(settings.cache_ttl_secs, 60);
        assert!(cli.validate().is_ok());
        assert!(matches!(cli.command, Command::Format { amount, .. } if amount == -12.5));
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig::parse_from(["fx-display", "currencies", "--timeout-secs", "0"]);
        assert!(cli.validate().is_err());
    }
}
