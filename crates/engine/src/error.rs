//! The module contains the errors the engine can return.
//!
//! The errors a caller is expected to recover from are:
//!
//! - [`InvalidAmount`] returned when the input is not a valid amount.
//! - [`InsufficientFunds`] returned when a checking account cannot cover a
//!   withdrawal.
//!
//! [`OverdraftExceeded`] is returned when a withdrawal goes past the overdraft
//! limit of an overdraft-protected account. Callers usually stop processing
//! when they see it.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InsufficientFunds`]: EngineError::InsufficientFunds
//!  [`OverdraftExceeded`]: EngineError::OverdraftExceeded
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("{0}")]
    OverdraftExceeded(String),
    #[error("Overflow: {0}")]
    Overflow(String),
    #[error("Invalid account: {0}")]
    InvalidAccount(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
}
