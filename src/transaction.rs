//! Menu selections and the transactions they start.

use crate::money::Money;

/// Main-menu choices, as numbered on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    BalanceInquiry,
    Withdrawal,
    Deposit,
    Exit,
}

impl MainMenuOption {
    pub const MENU: [&'static str; 5] = [
        "\nMain Menu:",
        "1 - View my balance",
        "2 - Withdraw cash",
        "3 - Deposit funds",
        "4 - Exit\n",
    ];

    pub const PROMPT: &'static str = "Choose an option: ";

    /// Decodes a keypad selection. Returns `None` outside `1..=4`.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(MainMenuOption::BalanceInquiry),
            2 => Some(MainMenuOption::Withdrawal),
            3 => Some(MainMenuOption::Deposit),
            4 => Some(MainMenuOption::Exit),
            _ => None,
        }
    }
}

/// Preset withdrawal amounts in whole dollars, indexed by selection `1..=5`.
pub const WITHDRAWAL_AMOUNTS: [u32; 5] = [20, 40, 60, 100, 200];

/// Withdrawal-menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalOption {
    /// Withdraw this many dollars.
    Amount(u32),
    Cancel,
}

impl WithdrawalOption {
    pub const MENU: [&'static str; 7] = [
        "\nWithdrawal menu:",
        "1 - $20",
        "2 - $40",
        "3 - $60",
        "4 - $100",
        "5 - $200",
        "6 - Cancel transaction",
    ];

    pub const PROMPT: &'static str = "\nChoose a withdrawal amount: ";

    /// Decodes a keypad selection. Returns `None` outside `1..=6`.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            6 => Some(WithdrawalOption::Cancel),
            1..=5 => WITHDRAWAL_AMOUNTS
                .get((selection - 1) as usize)
                .map(|&dollars| WithdrawalOption::Amount(dollars)),
            _ => None,
        }
    }
}

/// A deposit request entered in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositRequest {
    Amount(Money),
    Cancel,
}

impl DepositRequest {
    pub const PROMPT: &'static str = "\nPlease enter a deposit amount in CENTS (or 0 to cancel): ";

    /// Zero cancels. Negative entries are treated as a cancel as well.
    pub fn from_cents(cents: i64) -> Self {
        if cents <= 0 {
            DepositRequest::Cancel
        } else {
            DepositRequest::Amount(Money::from_cents(cents))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_selection() {
        assert_eq!(
            MainMenuOption::from_selection(1),
            Some(MainMenuOption::BalanceInquiry)
        );
        assert_eq!(MainMenuOption::from_selection(4), Some(MainMenuOption::Exit));
        assert_eq!(MainMenuOption::from_selection(0), None);
        assert_eq!(MainMenuOption::from_selection(5), None);
        assert_eq!(MainMenuOption::from_selection(-1), None);
    }

    #[test]
    fn test_withdrawal_selection() {
        assert_eq!(
            WithdrawalOption::from_selection(1),
            Some(WithdrawalOption::Amount(20))
        );
        assert_eq!(
            WithdrawalOption::from_selection(5),
            Some(WithdrawalOption::Amount(200))
        );
        assert_eq!(
            WithdrawalOption::from_selection(6),
            Some(WithdrawalOption::Cancel)
        );
        assert_eq!(WithdrawalOption::from_selection(7), None);
        assert_eq!(WithdrawalOption::from_selection(0), None);
    }

    #[test]
    fn test_deposit_request() {
        assert_eq!(DepositRequest::from_cents(0), DepositRequest::Cancel);
        assert_eq!(DepositRequest::from_cents(-500), DepositRequest::Cancel);
        assert_eq!(
            DepositRequest::from_cents(2550),
            DepositRequest::Amount(Money::from_cents(2550))
        );
    }
}
