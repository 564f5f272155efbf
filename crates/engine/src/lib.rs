//! Bank accounts and the rules their single transaction follows.
//!
//! An [`Account`] is one of three [`AccountKind`]s. Its balance only changes
//! through [`Account::process_transaction`], which parses the raw input and
//! either applies it or returns an [`EngineError`] leaving the account as it
//! was. A [`Bank`] holds the accounts of a run in order.
pub use accounts::{
    Account, AccountKind, InterestRate, OVERDRAFT_EXCEEDED, TransactionOutcome,
};
pub use bank::{AccountSeed, Bank, BankBuilder};
pub use currency::Currency;
pub use error::EngineError;
pub use money::Money;

mod accounts;
mod bank;
mod currency;
mod error;
mod money;

pub type ResultEngine<T> = Result<T, EngineError>;
