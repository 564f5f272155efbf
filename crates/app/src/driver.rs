//! Runs the console session: list the accounts, process one transaction per
//! account, list them again.
use std::io::{self, BufRead, Write};

use engine::{Account, Bank, EngineError};

use crate::error::{AppError, Result};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every account was processed and the updated list printed.
    Completed,
    /// A failure stopped the remaining transactions.
    Halted,
}

pub struct Driver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the whole session over `bank`.
    ///
    /// Transaction failures are reported on the output and never returned;
    /// only an output failure while listing the accounts or reporting is.
    pub fn run(&mut self, bank: &mut Bank) -> io::Result<RunStatus> {
        for account in bank.accounts() {
            writeln!(self.output, "{}", account.kind().title())?;
            self.display(account)?;
            writeln!(self.output)?;
        }

        match self.process(bank) {
            Ok(()) => Ok(RunStatus::Completed),
            Err(AppError::Engine(EngineError::OverdraftExceeded(message))) => {
                tracing::error!("transactions halted: {message}");
                writeln!(self.output, "Insufficient balance: {message}")?;
                Ok(RunStatus::Halted)
            }
            Err(err) => {
                tracing::error!("transactions halted: {err}");
                writeln!(self.output, "An error occurred: {err}")?;
                Ok(RunStatus::Halted)
            }
        }
    }

    /// Processes every account in order, then prints the updated list.
    ///
    /// Invalid amounts and insufficient funds only skip the current account;
    /// any other error stops here and is returned.
    fn process(&mut self, bank: &mut Bank) -> Result<()> {
        for account in bank.accounts_mut() {
            write!(self.output, "{}", account.prompt())?;
            self.output.flush()?;

            let raw = self.read_line()?;
            match account.process_transaction(&raw) {
                Ok(outcome) => {
                    writeln!(self.output, "{}", outcome.message(account.currency()))?;
                }
                Err(EngineError::InvalidAmount(_)) => writeln!(self.output, "Invalid amount.")?,
                Err(EngineError::InsufficientFunds(_)) => {
                    writeln!(self.output, "Insufficient balance.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "Updated Account Information:")?;
        for account in bank.accounts() {
            self.display(account)?;
        }

        Ok(())
    }

    /// Reads one line. End of input reads as an empty line.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }

    fn display(&mut self, account: &Account) -> io::Result<()> {
        writeln!(self.output, "{}", account.display_info())
    }
}
