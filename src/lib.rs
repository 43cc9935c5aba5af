//! # ATM Simulator
//!
//! A console teller machine that authenticates customers and runs balance
//! inquiries, cash withdrawals, and envelope deposits against an in-memory
//! bank database.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Balances use 2 decimal places via `rust_decimal`
//! - **Explicit state machine**: Each session step is an [`AtmState`] transition
//! - **Injected I/O**: The screen writes to any `Write`, the keypad is a trait
//! - **Invariant**: `available_balance <= total_balance` for every account
//!
//! ## Example
//!
//! ```
//! use atm_simulator::{Atm, ScriptedKeypad};
//!
//! // account, PIN, "view balance", "exit"
//! let keypad = ScriptedKeypad::new([12345, 54321, 1, 4]);
//! let mut atm = Atm::new(keypad, std::io::sink());
//! atm.run_session().unwrap();
//!
//! assert!(atm.screen().messages().iter().any(|m| m == "$1,000.00"));
//! ```

pub mod account;
pub mod atm;
pub mod bank_database;
pub mod cash_dispenser;
pub mod config;
pub mod deposit_slot;
pub mod error;
pub mod keypad;
pub mod money;
pub mod screen;
pub mod transaction;

pub use account::Account;
pub use atm::{Atm, AtmState};
pub use bank_database::BankDatabase;
pub use cash_dispenser::CashDispenser;
pub use config::AtmConfig;
pub use deposit_slot::DepositSlot;
pub use error::{AtmError, Rejection, Result};
pub use keypad::{Keypad, LineKeypad, ScriptedKeypad};
pub use money::Money;
pub use screen::Screen;
pub use transaction::{DepositRequest, MainMenuOption, WithdrawalOption};
