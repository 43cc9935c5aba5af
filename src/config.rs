//! Command-line configuration for the `atm` binary.

use crate::bank_database::BankDatabase;
use crate::cash_dispenser::{CashDispenser, BILL_DENOMINATION, INITIAL_BILL_COUNT};
use crate::error::{AtmError, Result};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Machine setup chosen at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmConfig {
    /// CSV file with `account,pin,available,total` rows. Built-in accounts
    /// are used when absent.
    pub accounts_path: Option<PathBuf>,

    /// Bills loaded into the dispenser.
    pub initial_bills: u32,
}

impl Default for AtmConfig {
    fn default() -> Self {
        AtmConfig {
            accounts_path: None,
            initial_bills: INITIAL_BILL_COUNT,
        }
    }
}

impl AtmConfig {
    /// Parses `[--bills <N>] [ACCOUNTS_CSV]`, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = AtmConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bills" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AtmError::InvalidArgument("--bills needs a value".into()))?;
                    config.initial_bills = value.parse().map_err(|_| {
                        AtmError::InvalidArgument(format!("bill count {:?} is not a number", value))
                    })?;
                }
                flag if flag.starts_with("--") => {
                    return Err(AtmError::InvalidArgument(format!("unknown flag {}", flag)));
                }
                path => {
                    if config.accounts_path.is_some() {
                        return Err(AtmError::InvalidArgument(format!(
                            "unexpected extra argument {}",
                            path
                        )));
                    }
                    config.accounts_path = Some(PathBuf::from(path));
                }
            }
        }

        Ok(config)
    }

    pub fn bank_database(&self) -> Result<BankDatabase> {
        match &self.accounts_path {
            Some(path) => {
                let file = File::open(path)?;
                let database = BankDatabase::from_csv(BufReader::new(file))?;
                info!("Loaded {} accounts from {}", database.len(), path.display());
                Ok(database)
            }
            None => Ok(BankDatabase::with_default_accounts()),
        }
    }

    pub fn cash_dispenser(&self) -> CashDispenser {
        CashDispenser::with_inventory(self.initial_bills, BILL_DENOMINATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AtmConfig> {
        AtmConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, AtmConfig::default());
        assert_eq!(config.cash_dispenser().bill_count(), 500);
        assert_eq!(config.bank_database().unwrap().len(), 2);
    }

    #[test]
    fn test_bills_and_path() {
        let config = parse(&["--bills", "3", "accounts.csv"]).unwrap();
        assert_eq!(config.initial_bills, 3);
        assert_eq!(config.accounts_path, Some(PathBuf::from("accounts.csv")));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(matches!(parse(&["--bills"]), Err(AtmError::InvalidArgument(_))));
        assert!(matches!(
            parse(&["--bills", "many"]),
            Err(AtmError::InvalidArgument(_))
        ));
        assert!(matches!(parse(&["--verbose"]), Err(AtmError::InvalidArgument(_))));
        assert!(matches!(parse(&["a.csv", "b.csv"]), Err(AtmError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_accounts_file_is_io_error() {
        let config = parse(&["/nonexistent/accounts.csv"]).unwrap();
        assert!(matches!(config.bank_database(), Err(AtmError::Io(_))));
    }
}
