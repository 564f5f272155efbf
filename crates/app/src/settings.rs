//! Handles settings for the application.
//!
//! Sources, from lowest to highest priority: the TOML file (default
//! `config/bank.toml`, optional), `BANK_*` environment variables, command line
//! flags. Without any source the program runs with the three default accounts.
use clap::Parser;
use engine::{AccountSeed, Bank, Currency};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/bank.toml";
const ENV_PREFIX: &str = "BANK";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tracing filter level for this binary and the engine.
    pub log_level: String,
    pub currency: Currency,
    /// Accounts to open, in processing order. Empty means the defaults.
    pub accounts: Vec<AccountSeed>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            currency: Currency::default(),
            accounts: Vec::new(),
        }
    }
}

impl Settings {
    pub fn seeds(&self) -> Vec<AccountSeed> {
        if self.accounts.is_empty() {
            Bank::default_seeds()
        } else {
            self.accounts.clone()
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "bank_console", about = "Runs one transaction on each account")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the log level (e.g. `debug`).
    #[arg(long)]
    log_level: Option<String>,
    /// Override the currency used to print amounts.
    #[arg(long, value_parser = parse_currency)]
    currency: Option<Currency>,
}

fn parse_currency(raw: &str) -> std::result::Result<Currency, String> {
    Currency::try_from(raw).map_err(|err| err.to_string())
}

pub fn load() -> Result<Settings> {
    load_from(Args::parse(), config::Environment::with_prefix(ENV_PREFIX))
}

pub fn load_from(args: Args, environment: config::Environment) -> Result<Settings> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(environment)
        .build()?;
    let mut settings: Settings = settings.try_deserialize()?;

    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }

    Ok(settings)
}
