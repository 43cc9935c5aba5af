//! In-memory bank database.
//!
//! Accounts are keyed by account number. The set of accounts is fixed once
//! loaded; only balances change during a run.

use crate::account::Account;
use crate::error::{AtmError, Result};
use crate::money::Money;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Raw account row as read from CSV.
///
/// Expected header: `account,pin,available,total`.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    pub account: u32,
    pub pin: u32,
    pub available: Money,
    pub total: Money,
}

impl AccountRecord {
    /// Validates the row and turns it into an [`Account`].
    fn into_account(self, row: usize) -> Result<Account> {
        if self.available.is_negative() || self.total.is_negative() {
            return Err(AtmError::InvalidRecord {
                row,
                message: "balances must not be negative".to_string(),
            });
        }
        if self.available > self.total {
            return Err(AtmError::InvalidRecord {
                row,
                message: format!(
                    "available balance {} exceeds total balance {}",
                    self.available, self.total
                ),
            });
        }
        Ok(Account::new(self.account, self.pin, self.available, self.total))
    }
}

/// Lookup table from account number to [`Account`].
#[derive(Debug, Clone, Default)]
pub struct BankDatabase {
    accounts: HashMap<u32, Account>,
}

impl BankDatabase {
    /// Creates an empty database.
    pub fn new() -> Self {
        BankDatabase {
            accounts: HashMap::new(),
        }
    }

    /// The two accounts every classroom ATM ships with.
    pub fn with_default_accounts() -> Self {
        let mut database = BankDatabase::new();
        for account in [
            Account::new(
                12345,
                54321,
                Money::from_dollars(1000),
                Money::from_dollars(1200),
            ),
            Account::new(98765, 56789, Money::from_dollars(200), Money::from_dollars(200)),
        ] {
            database.accounts.insert(account.account_number(), account);
        }
        database
    }

    /// Loads accounts from CSV.
    ///
    /// Invalid rows and duplicate account numbers are logged at warn level
    /// and skipped. Only reader-level failures are returned as errors.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut database = BankDatabase::new();
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<AccountRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    continue;
                }
            };

            if let Err(e) = database.insert_record(record, row_num) {
                warn!("Row {}: {}", row_num, e);
            }
        }

        debug!("Loaded {} accounts", database.len());
        Ok(database)
    }

    fn insert_record(&mut self, record: AccountRecord, row: usize) -> Result<()> {
        if self.accounts.contains_key(&record.account) {
            return Err(AtmError::DuplicateAccount {
                account: record.account,
                row,
            });
        }
        let account = record.into_account(row)?;
        self.accounts.insert(account.account_number(), account);
        Ok(())
    }

    /// Returns `true` iff the account exists and its PIN matches.
    pub fn authenticate_user(&self, account_number: u32, pin: u32) -> bool {
        self.accounts
            .get(&account_number)
            .map(|account| account.validate_pin(pin))
            .unwrap_or(false)
    }

    pub fn account(&self, account_number: u32) -> Option<&Account> {
        self.accounts.get(&account_number)
    }

    pub fn available_balance(&self, account_number: u32) -> Option<Money> {
        self.account(account_number).map(Account::available_balance)
    }

    pub fn total_balance(&self, account_number: u32) -> Option<Money> {
        self.account(account_number).map(Account::total_balance)
    }

    /// Debits the account. Returns `false` if it does not exist.
    #[must_use]
    pub fn debit(&mut self, account_number: u32, amount: Money) -> bool {
        match self.accounts.get_mut(&account_number) {
            Some(account) => {
                account.debit(amount);
                true
            }
            None => false,
        }
    }

    /// Credits the account's total balance. Returns `false` if it does not exist.
    #[must_use]
    pub fn credit(&mut self, account_number: u32, amount: Money) -> bool {
        match self.accounts.get_mut(&account_number) {
            Some(account) => {
                account.credit(amount);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(csv: &str) -> BankDatabase {
        BankDatabase::from_csv(Cursor::new(csv)).unwrap()
    }

    #[test]
    fn test_authenticate_default_accounts() {
        let database = BankDatabase::with_default_accounts();

        assert!(database.authenticate_user(12345, 54321));
        assert!(database.authenticate_user(98765, 56789));
        assert!(!database.authenticate_user(12345, 12345));
        assert!(!database.authenticate_user(67890, 54321));
    }

    #[test]
    fn test_balance_queries() {
        let database = BankDatabase::with_default_accounts();

        assert_eq!(database.available_balance(12345), Some(Money::from_dollars(1000)));
        assert_eq!(database.total_balance(12345), Some(Money::from_dollars(1200)));
        assert_eq!(database.available_balance(67890), None);
    }

    #[test]
    fn test_debit_and_credit_route_to_account() {
        let mut database = BankDatabase::with_default_accounts();

        assert!(database.debit(98765, Money::from_dollars(40)));
        assert!(database.credit(98765, Money::from_cents(1050)));

        let account = database.account(98765).unwrap();
        assert_eq!(account.available_balance().to_string(), "160.00");
        assert_eq!(account.total_balance().to_string(), "170.50");
    }

    #[test]
    fn test_unknown_account_mutations_are_noops() {
        let mut database = BankDatabase::with_default_accounts();

        assert!(!database.debit(1, Money::from_dollars(20)));
        assert!(!database.credit(1, Money::from_dollars(20)));
        assert_eq!(database.len(), 2);
    }

    #[test]
    fn test_from_csv_loads_accounts() {
        let database = load(
            "account, pin, available, total
11111, 2222, 50.25, 75.00
33333, 4444, 0, 0",
        );

        assert_eq!(database.len(), 2);
        assert!(database.authenticate_user(11111, 2222));
        assert_eq!(database.total_balance(11111).unwrap().to_string(), "75.00");
    }

    #[test]
    fn test_from_csv_skips_invalid_rows() {
        let database = load(
            "account,pin,available,total
11111,2222,100.00,50.00
abc,1,1,1
22222,3333,-5,10
44444,5555,10,10",
        );

        assert_eq!(database.len(), 1);
        assert!(database.account(44444).is_some());
    }

    #[test]
    fn test_from_csv_keeps_first_duplicate() {
        let database = load(
            "account,pin,available,total
11111,1,10,10
11111,2,20,20",
        );

        assert_eq!(database.len(), 1);
        assert!(database.authenticate_user(11111, 1));
        assert!(!database.authenticate_user(11111, 2));
    }
}
