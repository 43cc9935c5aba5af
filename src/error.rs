//! Error types for the ATM.
//!
//! [`AtmError`] covers infrastructure failures that stop the machine.
//! [`Rejection`] covers customer-facing failures that are shown on the
//! screen and never abort a session.

use thiserror::Error;

/// Result type alias for ATM operations
pub type Result<T> = std::result::Result<T, AtmError>;

/// Errors that can occur while running the ATM.
#[derive(Error, Debug)]
pub enum AtmError {
    /// Failed to read input or write to the screen sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid account record
    #[error("Invalid account at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Account number already present in the database
    #[error("Duplicate account number {account} at row {row}")]
    DuplicateAccount { account: u32, row: usize },

    /// Bad command-line argument
    #[error("Invalid argument: {0}. Usage: atm [--bills <N>] [accounts.csv]")]
    InvalidArgument(String),

    /// The keypad has no more input
    #[error("Keypad input closed")]
    InputClosed,
}

/// A customer-facing failure during a session.
///
/// Each variant maps to one fixed screen message; the session always
/// continues at the relevant menu.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("invalid account number or PIN")]
    InvalidCredentials,

    #[error("invalid menu selection")]
    InvalidMenuSelection,

    #[error("insufficient funds in account")]
    InsufficientFunds,

    #[error("insufficient cash in dispenser")]
    InsufficientDispenserCash,

    /// The authenticated account is no longer in the database.
    #[error("account not found")]
    AccountNotFound,
}

impl Rejection {
    /// The exact text shown on the screen for this rejection.
    pub fn screen_message(&self) -> &'static str {
        match self {
            Rejection::InvalidCredentials => {
                "\nInvalid account number or PIN code. Please try again."
            }
            Rejection::InvalidMenuSelection => "\nInvalid selection. Try again.",
            Rejection::InsufficientFunds => {
                "\nInsufficient funds in your account.\n\nPlease choose a smaller amount."
            }
            Rejection::InsufficientDispenserCash => {
                "\nInsufficient cash available in the ATM.\n\nPlease choose a smaller amount."
            }
            Rejection::AccountNotFound => {
                "\nYour account is unavailable. Please contact your bank."
            }
        }
    }
}
