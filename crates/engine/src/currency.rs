use serde::{Deserialize, Serialize};

use crate::{EngineError, Money};

/// ISO-like currency code used to render balances and confirmations.
///
/// Amounts are always stored as `Money` (integer cents); the currency only
/// decides the symbol and where it goes.
///
/// ```rust
/// use engine::{Currency, Money};
///
/// assert_eq!(Currency::Usd.format(Money::new(115_050)), "$1150.50");
/// assert_eq!(Currency::Eur.format(Money::new(-25_000)), "-250.00€");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Renders `amount` with the currency symbol in its usual position.
    #[must_use]
    pub fn format(self, amount: Money) -> String {
        match self {
            Currency::Usd => format!("{}{amount}", self.symbol()),
            Currency::Eur => format!("{amount}{}", self.symbol()),
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(EngineError::InvalidAccount(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}
