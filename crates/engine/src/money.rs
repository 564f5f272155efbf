//! Fixed-point amounts and the parser for amounts typed by the user.
use std::{fmt, ops::Neg, str::FromStr};

use crate::EngineError;

/// Number of fractional digits every amount carries.
const SCALE: u32 = 2;

/// Signed amount in cents.
///
/// Balances, limits and transaction amounts all use this type. `Display`
/// prints the bare number with two decimals; [`Currency::format`] adds the
/// symbol.
///
/// Input follows the usual `1,234.56` notation: `,` groups thousands in the
/// integer part, `.` starts the fraction, and either part may be missing
/// (`.5`, `7.`). More than two fractional digits is not a valid amount.
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!(".5".parse::<Money>().unwrap(), Money::new(50));
/// assert_eq!("1,000".parse::<Money>().unwrap(), Money::new(1000_00));
/// assert!("12.345".parse::<Money>().is_err());
/// ```
///
/// [`Currency::format`]: crate::Currency::format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = 10u64.pow(SCALE);
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.{:02}", abs / unit, abs % unit)
    }
}

/// Where the scanner is inside an amount.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Part {
    Integer,
    Fraction,
}

impl FromStr for Money {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let not_a_number = || EngineError::InvalidAmount(format!("\"{text}\" is not a number"));
        let too_large = || EngineError::InvalidAmount(format!("\"{text}\" is too large"));

        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let mut part = Part::Integer;
        let mut digits = 0usize;
        let mut fraction_digits = 0u32;
        let mut cents: i64 = 0;
        let mut last = None;

        for c in body.chars() {
            match (c, part) {
                ('0'..='9', _) => {
                    if part == Part::Fraction {
                        fraction_digits += 1;
                        if fraction_digits > SCALE {
                            return Err(EngineError::InvalidAmount(format!(
                                "\"{text}\" has more than {SCALE} decimals"
                            )));
                        }
                    }
                    let digit = i64::from(c as u8 - b'0');
                    cents = cents
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or_else(too_large)?;
                    digits += 1;
                }
                // Group separators sit between integer digits only.
                (',', Part::Integer) if matches!(last, Some('0'..='9')) => {}
                ('.', Part::Integer) if last != Some(',') => part = Part::Fraction,
                _ => return Err(not_a_number()),
            }
            last = Some(c);
        }

        if digits == 0 || last == Some(',') {
            return Err(not_a_number());
        }

        let cents = cents
            .checked_mul(10i64.pow(SCALE - fraction_digits))
            .ok_or_else(too_large)?;
        Ok(Money(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(raw: &str) -> i64 {
        raw.parse::<Money>().unwrap().cents()
    }

    #[test]
    fn display_always_has_two_decimals() {
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::new(5).to_string(), "0.05");
        assert_eq!(Money::new(1150_50).to_string(), "1150.50");
        assert_eq!(Money::new(-250_00).to_string(), "-250.00");
        assert_eq!(Money::new(i64::MIN).to_string(), "-92233720368547758.08");
    }

    #[test]
    fn parses_decimal_notation() {
        assert_eq!(cents("150.50"), 150_50);
        assert_eq!(cents("1000"), 1000_00);
        assert_eq!(cents(".5"), 50);
        assert_eq!(cents("-.05"), -5);
        assert_eq!(cents("7."), 700);
        assert_eq!(cents("+1.25"), 125);
        assert_eq!(cents(" 2.30 \n"), 230);
        assert_eq!(cents("-0"), 0);
    }

    #[test]
    fn commas_group_thousands() {
        assert_eq!(cents("1,000"), 1000_00);
        assert_eq!(cents("1,234,567.89"), 1_234_567_89);
        assert_eq!(cents("1,5"), 15_00);
    }

    #[test]
    fn rejects_what_is_not_a_number() {
        for raw in [
            "abc", "", "   ", "-", "+", ".", "1.2.3", "1e5", "12.345", "0.001", ",5", "5,",
            "1,.5", "1.5,0", "--1", "1 000", "$5",
        ] {
            assert!(
                matches!(raw.parse::<Money>(), Err(EngineError::InvalidAmount(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(cents("92233720368547758.07"), i64::MAX);
        assert!("92233720368547758.08".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
        assert!("922337203685477580".parse::<Money>().is_err());
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MIN).checked_sub(Money::new(1)), None);
        assert_eq!(
            Money::new(200_00).checked_sub(Money::new(450_00)),
            Some(Money::new(-250_00))
        );
    }
}
