use std::io;

use driver::{Driver, RunStatus};
use engine::Bank;
use error::AppError;

mod driver;
mod error;
mod settings;

fn main() -> Result<(), AppError> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "bank_console={level},engine={level}",
            level = settings.log_level
        ))
        .with_writer(io::stderr)
        .init();

    let mut bank = Bank::builder()
        .currency(settings.currency)
        .accounts(settings.seeds())
        .build()?;
    tracing::info!("Starting session with {} accounts", bank.accounts().len());

    let mut driver = Driver::new(io::stdin().lock(), io::stdout().lock());
    match driver.run(&mut bank)? {
        RunStatus::Completed => tracing::info!("Session completed"),
        RunStatus::Halted => tracing::warn!("Session halted before every transaction ran"),
    }

    Ok(())
}
