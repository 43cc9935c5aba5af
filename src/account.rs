//! Bank account model and operations.
//!
//! Maintains the invariant: `available_balance <= total_balance`.

use crate::money::Money;

/// A customer's bank account.
///
/// # Invariants
///
/// - `available_balance <= total_balance` after every operation with a
///   non-negative amount
///
/// # Pending Deposits
///
/// Deposits only raise the total balance. The difference between total and
/// available is money that has been deposited but has not cleared yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: u32,
    pin: u32,

    /// Funds that can be withdrawn right now.
    available_balance: Money,

    /// Available funds plus pending deposits.
    total_balance: Money,
}

impl Account {
    /// Creates an account with the given balances.
    pub fn new(
        account_number: u32,
        pin: u32,
        available_balance: Money,
        total_balance: Money,
    ) -> Self {
        Account {
            account_number,
            pin,
            available_balance,
            total_balance,
        }
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    /// Returns `true` if `candidate` matches the stored PIN.
    ///
    /// There is no lockout and no attempt counting.
    pub fn validate_pin(&self, candidate: u32) -> bool {
        self.pin == candidate
    }

    pub fn available_balance(&self) -> Money {
        self.available_balance
    }

    pub fn total_balance(&self) -> Money {
        self.total_balance
    }

    /// Removes funds from both available and total balance.
    ///
    /// No sufficiency check happens here; the caller must have compared
    /// `amount` against [`Account::available_balance`] first.
    pub fn debit(&mut self, amount: Money) {
        self.available_balance -= amount;
        self.total_balance -= amount;
    }

    /// Adds a deposit to the total balance only.
    pub fn credit(&mut self, amount: Money) {
        self.total_balance += amount;
    }

    /// Verifies the invariant: `available_balance <= total_balance`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        self.available_balance <= self.total_balance
    }
}
