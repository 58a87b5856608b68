use clap::Parser;
use fx_display::config::cli::Command;
use fx_display::utils::{logger, validation::Validate};
use fx_display::{CliConfig, CurrencyEngine, Region};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logging() {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = config.settings()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    match &config.command {
        Command::Currencies { region } => {
            let currencies = match region {
                Some(name) => match name.parse::<Region>() {
                    Ok(region) => fx_display::list_by_region(region),
                    Err(e) => {
                        eprintln!("❌ {}", e);
                        std::process::exit(2);
                    }
                },
                None => fx_display::list_supported().iter().collect(),
            };
            for c in currencies {
                println!("{}  {:<6} {:<28} {}", c.code, c.symbol, c.name, c.locale);
            }
        }
        Command::Format { amount, code } => {
            println!("{}", fx_display::format(*amount, code));
        }
        Command::Convert { amount, from, to } => {
            let engine = CurrencyEngine::from_config(&settings)?;
            let result = engine.convert(*amount, from, to).await;
            println!(
                "{} = {}",
                fx_display::format(result.amount, &result.from_currency),
                fx_display::format(result.converted_amount, &result.to_currency)
            );
            println!("rate {} ({})", result.exchange_rate, result.rate_origin);
            if result.rate_origin.is_approximate() {
                eprintln!("⚠️  rate is approximate: live rates were unavailable");
            }
        }
        Command::Rates { base, codes } => {
            let engine = CurrencyEngine::from_config(&settings)?;
            let targets: Vec<&str> = if codes.is_empty() {
                fx_display::list_supported().iter().map(|c| c.code).collect()
            } else {
                codes.iter().map(String::as_str).collect()
            };
            for rate in engine.rates_against(base, &targets).await {
                println!(
                    "{} {} -> {}  {:.6}  ({})",
                    fx_display::symbol_for(&rate.from),
                    rate.from,
                    rate.to,
                    rate.rate,
                    rate.origin
                );
            }
            let status = engine.cache_status();
            tracing::info!(
                pivot = engine.base_currency(),
                size = status.size,
                expired = status.is_expired,
                "Rate cache status"
            );
        }
    }

    Ok(())
}
