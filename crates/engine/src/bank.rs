//! The `Bank` owns the accounts of a run, in the order they were added.
use serde::Deserialize;

use crate::{Account, Currency, EngineError, InterestRate, Money, ResultEngine};

/// Description of an account to open.
///
/// Amounts are strings so they go through the same parser as user input
/// (`"1000"`, `"150.50"`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccountSeed {
    Savings {
        id: String,
        balance: String,
        interest_rate: String,
    },
    Checking {
        id: String,
        balance: String,
    },
    OverdraftProtection {
        id: String,
        balance: String,
        overdraft_limit: String,
    },
}

impl AccountSeed {
    pub fn id(&self) -> &str {
        match self {
            AccountSeed::Savings { id, .. }
            | AccountSeed::Checking { id, .. }
            | AccountSeed::OverdraftProtection { id, .. } => id,
        }
    }

    /// Builds the account, validating every amount.
    pub fn open(&self, currency: Currency) -> ResultEngine<Account> {
        let invalid = |field: &str, err: EngineError| {
            EngineError::InvalidAccount(format!("{} {field}: {err}", self.id()))
        };
        let money = |field: &str, raw: &str| raw.parse::<Money>().map_err(|err| invalid(field, err));

        if self.id().trim().is_empty() {
            return Err(EngineError::InvalidAccount("empty account id".to_string()));
        }

        let account = match self {
            AccountSeed::Savings {
                id,
                balance,
                interest_rate,
            } => {
                let rate = interest_rate
                    .parse::<InterestRate>()
                    .map_err(|err| invalid("interest_rate", err))?;
                Account::savings(id.as_str(), money("balance", balance)?, rate)
            }
            AccountSeed::Checking { id, balance } => {
                Account::checking(id.as_str(), money("balance", balance)?)
            }
            AccountSeed::OverdraftProtection {
                id,
                balance,
                overdraft_limit,
            } => {
                let limit = money("overdraft_limit", overdraft_limit)?;
                if limit.is_negative() {
                    return Err(EngineError::InvalidAccount(format!(
                        "{id} overdraft_limit cannot be negative"
                    )));
                }
                Account::overdraft_protection(id.as_str(), money("balance", balance)?, limit)
            }
        };

        Ok(account.with_currency(currency))
    }
}

#[derive(Debug)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    /// Return a builder for `Bank`. Help to build the struct.
    pub fn builder() -> BankBuilder {
        BankBuilder::default()
    }

    /// The accounts every run starts with unless configured otherwise.
    pub fn default_seeds() -> Vec<AccountSeed> {
        vec![
            AccountSeed::Savings {
                id: "SA123".to_string(),
                balance: "1000".to_string(),
                interest_rate: "5".to_string(),
            },
            AccountSeed::Checking {
                id: "CA456".to_string(),
                balance: "500".to_string(),
            },
            AccountSeed::OverdraftProtection {
                id: "OA789".to_string(),
                balance: "200".to_string(),
                overdraft_limit: "300".to_string(),
            },
        ]
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }

    pub fn account(&self, id: &str) -> ResultEngine<&Account> {
        self.accounts
            .iter()
            .find(|account| account.id() == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn account_mut(&mut self, id: &str) -> ResultEngine<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.id() == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct BankBuilder {
    currency: Currency,
    seeds: Vec<AccountSeed>,
}

impl BankBuilder {
    pub fn currency(mut self, currency: Currency) -> BankBuilder {
        self.currency = currency;
        self
    }

    pub fn account(mut self, seed: AccountSeed) -> BankBuilder {
        self.seeds.push(seed);
        self
    }

    pub fn accounts(mut self, seeds: impl IntoIterator<Item = AccountSeed>) -> BankBuilder {
        self.seeds.extend(seeds);
        self
    }

    pub fn build(self) -> ResultEngine<Bank> {
        let mut accounts: Vec<Account> = Vec::with_capacity(self.seeds.len());

        for seed in &self.seeds {
            if accounts.iter().any(|account| account.id() == seed.id()) {
                return Err(EngineError::ExistingKey(seed.id().to_string()));
            }
            accounts.push(seed.open(self.currency)?);
        }

        tracing::info!(accounts = accounts.len(), currency = %self.currency, "bank ready");

        Ok(Bank { accounts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountKind;

    fn bank() -> Bank {
        Bank::builder()
            .accounts(Bank::default_seeds())
            .build()
            .unwrap()
    }

    #[test]
    fn default_seeds_in_order() {
        let bank = bank();
        let ids: Vec<&str> = bank.accounts().iter().map(Account::id).collect();

        assert_eq!(ids, ["SA123", "CA456", "OA789"]);
        assert_eq!(bank.account("SA123").unwrap().balance(), Money::new(1000_00));
        assert_eq!(bank.account("CA456").unwrap().balance(), Money::new(500_00));
        assert_eq!(
            *bank.account("OA789").unwrap().kind(),
            AccountKind::OverdraftProtection {
                overdraft_limit: Money::new(300_00)
            }
        );
        assert_eq!(
            *bank.account("SA123").unwrap().kind(),
            AccountKind::Savings {
                interest_rate: InterestRate::from_hundredths(500)
            }
        );
    }

    #[test]
    fn account_mut_mutates_in_place() {
        let mut bank = bank();
        bank.account_mut("CA456")
            .unwrap()
            .process_transaction("100")
            .unwrap();

        assert_eq!(bank.account("CA456").unwrap().balance(), Money::new(400_00));
    }

    #[test]
    fn missing_account() {
        let bank = bank();
        assert_eq!(
            bank.account("XX000").unwrap_err(),
            EngineError::KeyNotFound("XX000".to_string())
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Bank::builder()
            .account(AccountSeed::Checking {
                id: "CA456".to_string(),
                balance: "1".to_string(),
            })
            .account(AccountSeed::Checking {
                id: "CA456".to_string(),
                balance: "2".to_string(),
            })
            .build()
            .unwrap_err();

        assert_eq!(err, EngineError::ExistingKey("CA456".to_string()));
    }

    #[test]
    fn invalid_seed_amounts() {
        let seeds = [
            AccountSeed::Checking {
                id: "CA1".to_string(),
                balance: "lots".to_string(),
            },
            AccountSeed::OverdraftProtection {
                id: "OA1".to_string(),
                balance: "10".to_string(),
                overdraft_limit: "-5".to_string(),
            },
            AccountSeed::Savings {
                id: "SA1".to_string(),
                balance: "10".to_string(),
                interest_rate: "-1".to_string(),
            },
            AccountSeed::Checking {
                id: " ".to_string(),
                balance: "10".to_string(),
            },
        ];

        for seed in seeds {
            let err = Bank::builder().account(seed.clone()).build().unwrap_err();
            assert!(
                matches!(err, EngineError::InvalidAccount(_)),
                "{seed:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn currency_is_applied_to_accounts() {
        let bank = Bank::builder()
            .currency(Currency::Eur)
            .accounts(Bank::default_seeds())
            .build()
            .unwrap();

        assert!(bank.accounts().iter().all(|a| a.currency() == Currency::Eur));
    }
}
