//! The module contains the representation of a bank account.
use core::fmt;
use std::str::FromStr;

use crate::{Currency, EngineError, Money, ResultEngine};

/// Message carried by [`EngineError::OverdraftExceeded`].
pub const OVERDRAFT_EXCEEDED: &str = "Exceeds available balance including overdraft.";

/// Yearly interest rate, stored in hundredths of a percent.
///
/// Parsed like [`Money`], so `"5"` is 5% and `"2.75"` is 2.75%.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterestRate(i64);

impl InterestRate {
    /// Creates a rate from hundredths of a percent (`500` is 5%).
    #[must_use]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }
}

impl FromStr for InterestRate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate: Money = s.parse()?;
        if rate.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "interest rate cannot be negative: {}",
                s.trim()
            )));
        }
        Ok(Self(rate.cents()))
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Money::new(self.0).to_string();
        let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
        f.write_str(rendered)
    }
}

/// The kind of an account, with the data only that kind carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    /// Accepts deposits. The rate is informational; no interest is applied.
    Savings { interest_rate: InterestRate },
    /// Accepts withdrawals up to the current balance.
    Checking,
    /// Accepts withdrawals up to the balance plus `overdraft_limit`.
    OverdraftProtection { overdraft_limit: Money },
}

impl AccountKind {
    /// Heading used when the account is listed.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Savings Account:",
            AccountKind::Checking => "Checking Account:",
            AccountKind::OverdraftProtection { .. } => "Overdraft Protection Account:",
        }
    }

    /// Text shown before reading the transaction amount.
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Enter deposit amount: ",
            AccountKind::Checking | AccountKind::OverdraftProtection { .. } => {
                "Enter withdrawal amount: "
            }
        }
    }
}

/// Result of a transaction that changed the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionOutcome {
    Deposited(Money),
    Withdrew(Money),
    /// The withdrawal took the balance below zero.
    WithdrewWithOverdraft(Money),
}

impl TransactionOutcome {
    /// Confirmation line for the user.
    #[must_use]
    pub fn message(&self, currency: Currency) -> String {
        match self {
            TransactionOutcome::Deposited(amount) => {
                format!("Deposited {}", currency.format(*amount))
            }
            TransactionOutcome::Withdrew(amount) => {
                format!("Withdrew {}", currency.format(*amount))
            }
            TransactionOutcome::WithdrewWithOverdraft(amount) => {
                format!("Withdrew {} with overdraft protection", currency.format(*amount))
            }
        }
    }
}

/// A bank account.
///
/// Every account has an identifier, fixed at creation, and a balance that only
/// [`process_transaction`] changes. What a transaction does depends on the
/// [`AccountKind`]:
///
/// - savings: the amount is deposited;
/// - checking: the amount is withdrawn if the balance covers it;
/// - overdraft protection: the amount is withdrawn if the balance plus the
///   overdraft limit covers it.
///
/// ```rust
/// use engine::{Account, Money, TransactionOutcome};
///
/// let mut account = Account::overdraft_protection("OA789", Money::new(200_00), Money::new(300_00));
/// let outcome = account.process_transaction("450").unwrap();
///
/// assert_eq!(outcome, TransactionOutcome::WithdrewWithOverdraft(Money::new(450_00)));
/// assert_eq!(account.balance(), Money::new(-250_00));
/// ```
///
/// [`process_transaction`]: Account::process_transaction
#[derive(Clone, Debug)]
pub struct Account {
    id: String,
    balance: Money,
    currency: Currency,
    kind: AccountKind,
}

impl Account {
    pub fn new(id: impl Into<String>, balance: Money, kind: AccountKind) -> Self {
        Self {
            id: id.into(),
            balance,
            currency: Currency::default(),
            kind,
        }
    }

    pub fn savings(id: impl Into<String>, balance: Money, interest_rate: InterestRate) -> Self {
        Self::new(id, balance, AccountKind::Savings { interest_rate })
    }

    pub fn checking(id: impl Into<String>, balance: Money) -> Self {
        Self::new(id, balance, AccountKind::Checking)
    }

    pub fn overdraft_protection(
        id: impl Into<String>,
        balance: Money,
        overdraft_limit: Money,
    ) -> Self {
        Self::new(id, balance, AccountKind::OverdraftProtection { overdraft_limit })
    }

    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn prompt(&self) -> &'static str {
        self.kind.prompt()
    }

    /// Formatted account details, one field per line.
    pub fn display_info(&self) -> String {
        self.to_string()
    }

    /// Parses `raw` as an amount and applies it according to the account kind.
    ///
    /// On error the balance is left untouched.
    pub fn process_transaction(&mut self, raw: &str) -> ResultEngine<TransactionOutcome> {
        let amount = raw.parse::<Money>().inspect_err(|err| {
            tracing::warn!(account = %self.id, "rejected transaction: {err}");
        })?;

        let (balance, outcome) = self.preview(amount).inspect_err(|err| {
            tracing::warn!(account = %self.id, %amount, "rejected transaction: {err}");
        })?;

        self.balance = balance;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "transaction applied");

        Ok(outcome)
    }

    /// Computes the balance `amount` would leave, without applying it.
    fn preview(&self, amount: Money) -> ResultEngine<(Money, TransactionOutcome)> {
        let overflow = || EngineError::Overflow(format!("balance of {}", self.id));

        match self.kind {
            AccountKind::Savings { .. } => {
                let balance = self.balance.checked_add(amount).ok_or_else(overflow)?;
                Ok((balance, TransactionOutcome::Deposited(amount)))
            }
            AccountKind::Checking => {
                if amount > self.balance {
                    return Err(EngineError::InsufficientFunds(format!(
                        "{} has {} available, requested {}",
                        self.id, self.balance, amount
                    )));
                }
                let balance = self.balance.checked_sub(amount).ok_or_else(overflow)?;
                Ok((balance, TransactionOutcome::Withdrew(amount)))
            }
            AccountKind::OverdraftProtection { overdraft_limit } => {
                let available = self
                    .balance
                    .checked_add(overdraft_limit)
                    .ok_or_else(overflow)?;
                if amount > available {
                    return Err(EngineError::OverdraftExceeded(OVERDRAFT_EXCEEDED.to_string()));
                }
                let balance = self.balance.checked_sub(amount).ok_or_else(overflow)?;
                if amount > self.balance {
                    Ok((balance, TransactionOutcome::WithdrewWithOverdraft(amount)))
                } else {
                    Ok((balance, TransactionOutcome::Withdrew(amount)))
                }
            }
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Number: {}", self.id)?;
        write!(f, "Balance: {}", self.currency.format(self.balance))?;
        if let AccountKind::Savings { interest_rate } = self.kind {
            write!(f, "\nInterest Rate: {interest_rate}%")?;
        }
        Ok(())
    }
}
