//! ATM session state machine.
//!
//! A session walks `Idle → AwaitingAccountNumber → AwaitingPin → MainMenu`,
//! branches into balance, withdrawal, or deposit flows that come back to
//! `MainMenu`, and ends at `SessionEnd`. Every customer mistake becomes a
//! screen message and a return to the relevant menu; only I/O failures and
//! closed input leave the loop.

use crate::bank_database::BankDatabase;
use crate::cash_dispenser::CashDispenser;
use crate::deposit_slot::DepositSlot;
use crate::error::{AtmError, Rejection, Result};
use crate::keypad::Keypad;
use crate::money::Money;
use crate::screen::Screen;
use crate::transaction::{DepositRequest, MainMenuOption, WithdrawalOption};
use log::{debug, info, warn};
use std::io::Write;

/// Where a session currently is.
///
/// `account_number` is `None` in `AwaitingPin` when the typed number cannot
/// be an account number at all; authentication then simply fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmState {
    Idle,
    AwaitingAccountNumber,
    AwaitingPin { account_number: Option<u32> },
    MainMenu { account_number: u32 },
    ViewBalance { account_number: u32 },
    WithdrawalMenu { account_number: u32 },
    DepositFlow { account_number: u32 },
    SessionEnd,
}

/// The teller machine and all of its devices.
pub struct Atm<K: Keypad, W: Write> {
    screen: Screen<W>,
    keypad: K,
    bank_database: BankDatabase,
    cash_dispenser: CashDispenser,
    deposit_slot: DepositSlot,
}

impl<K: Keypad, W: Write> Atm<K, W> {
    /// Creates a machine with default accounts, inventory, and deposit slot.
    pub fn new(keypad: K, out: W) -> Self {
        Self::with_devices(
            keypad,
            Screen::new(out),
            BankDatabase::with_default_accounts(),
            CashDispenser::new(),
            DepositSlot::new(),
        )
    }

    pub fn with_devices(
        keypad: K,
        screen: Screen<W>,
        bank_database: BankDatabase,
        cash_dispenser: CashDispenser,
        deposit_slot: DepositSlot,
    ) -> Self {
        Atm {
            screen,
            keypad,
            bank_database,
            cash_dispenser,
            deposit_slot,
        }
    }

    pub fn screen(&self) -> &Screen<W> {
        &self.screen
    }

    pub fn bank_database(&self) -> &BankDatabase {
        &self.bank_database
    }

    pub fn cash_dispenser(&self) -> &CashDispenser {
        &self.cash_dispenser
    }

    pub fn keypad(&self) -> &K {
        &self.keypad
    }

    /// Runs sessions back to back until the keypad closes.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.run_session() {
                Ok(()) => {}
                Err(AtmError::InputClosed) => {
                    info!("Keypad input closed, shutting down");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Runs one customer session from the welcome screen to goodbye.
    pub fn run_session(&mut self) -> Result<()> {
        info!("Session started");
        let mut state = AtmState::Idle;
        while state != AtmState::SessionEnd {
            state = self.step(state)?;
        }
        self.step(AtmState::SessionEnd)?;
        info!("Session ended");
        Ok(())
    }

    /// Performs a single transition and returns the next state.
    ///
    /// `SessionEnd` shows the goodbye text and stays at `SessionEnd`.
    pub fn step(&mut self, state: AtmState) -> Result<AtmState> {
        debug!("State {:?}", state);
        match state {
            AtmState::Idle => {
                self.screen.display_message_line("\nWelcome!")?;
                Ok(AtmState::AwaitingAccountNumber)
            }
            AtmState::AwaitingAccountNumber => {
                self.screen
                    .display_message("\nPlease enter your bank account number: ")?;
                let input = self.keypad.get_input()?;
                Ok(AtmState::AwaitingPin {
                    account_number: u32::try_from(input).ok(),
                })
            }
            AtmState::AwaitingPin { account_number } => self.authenticate(account_number),
            AtmState::MainMenu { account_number } => self.main_menu(account_number),
            AtmState::ViewBalance { account_number } => self.view_balance(account_number),
            AtmState::WithdrawalMenu { account_number } => self.withdrawal_menu(account_number),
            AtmState::DepositFlow { account_number } => self.deposit_flow(account_number),
            AtmState::SessionEnd => {
                self.screen.display_message_line("\nExiting the system...")?;
                self.screen.display_message_line("\nThank you! Goodbye!")?;
                Ok(AtmState::SessionEnd)
            }
        }
    }

    fn reject(&mut self, rejection: Rejection) -> Result<()> {
        debug!("Rejected: {}", rejection);
        self.screen.display_message_line(rejection.screen_message())
    }

    fn authenticate(&mut self, account_number: Option<u32>) -> Result<AtmState> {
        self.screen.display_message("\nPlease enter your PIN: ")?;
        let pin = self.keypad.get_input()?;

        let authenticated = match (account_number, u32::try_from(pin)) {
            (Some(number), Ok(pin)) if self.bank_database.authenticate_user(number, pin) => {
                Some(number)
            }
            _ => None,
        };

        match authenticated {
            Some(number) => {
                info!("Account {} authenticated", number);
                Ok(AtmState::MainMenu {
                    account_number: number,
                })
            }
            None => {
                warn!("Authentication failed for account {:?}", account_number);
                self.reject(Rejection::InvalidCredentials)?;
                Ok(AtmState::Idle)
            }
        }
    }

    fn main_menu(&mut self, account_number: u32) -> Result<AtmState> {
        for line in MainMenuOption::MENU {
            self.screen.display_message_line(line)?;
        }
        self.screen.display_message(MainMenuOption::PROMPT)?;
        let selection = self.keypad.get_input()?;

        let next = match MainMenuOption::from_selection(selection) {
            Some(MainMenuOption::BalanceInquiry) => AtmState::ViewBalance { account_number },
            Some(MainMenuOption::Withdrawal) => AtmState::WithdrawalMenu { account_number },
            Some(MainMenuOption::Deposit) => AtmState::DepositFlow { account_number },
            Some(MainMenuOption::Exit) => AtmState::SessionEnd,
            None => {
                self.reject(Rejection::InvalidMenuSelection)?;
                AtmState::MainMenu { account_number }
            }
        };
        Ok(next)
    }

    /// Shows the rejection for an account that vanished after login and
    /// ends the session.
    fn account_unavailable(&mut self, account_number: u32) -> Result<AtmState> {
        warn!("Account {} missing from bank database", account_number);
        self.reject(Rejection::AccountNotFound)?;
        Ok(AtmState::SessionEnd)
    }

    fn view_balance(&mut self, account_number: u32) -> Result<AtmState> {
        let (available, total) = match self.bank_database.account(account_number) {
            Some(account) => (account.available_balance(), account.total_balance()),
            None => return self.account_unavailable(account_number),
        };

        self.screen.display_message_line("\nBalance Information:")?;
        self.screen.display_message(" - Available balance: ")?;
        self.screen.display_dollar_amount(available)?;
        self.screen.display_message("\n - Total balance:     ")?;
        self.screen.display_dollar_amount(total)?;
        self.screen.display_message_line("")?;
        Ok(AtmState::MainMenu { account_number })
    }

    fn withdrawal_menu(&mut self, account_number: u32) -> Result<AtmState> {
        for line in WithdrawalOption::MENU {
            self.screen.display_message_line(line)?;
        }
        self.screen.display_message(WithdrawalOption::PROMPT)?;
        let selection = self.keypad.get_input()?;

        match WithdrawalOption::from_selection(selection) {
            Some(WithdrawalOption::Amount(dollars)) => {
                match self.withdraw(account_number, dollars) {
                    Ok(()) => {
                        self.screen.display_message_line(
                            "\nYour cash has been dispensed. Please take your cash now.",
                        )?;
                        Ok(AtmState::MainMenu { account_number })
                    }
                    Err(Rejection::AccountNotFound) => self.account_unavailable(account_number),
                    Err(rejection) => {
                        self.reject(rejection)?;
                        Ok(AtmState::WithdrawalMenu { account_number })
                    }
                }
            }
            Some(WithdrawalOption::Cancel) => {
                self.screen.display_message_line("\nCanceling transaction...")?;
                Ok(AtmState::MainMenu { account_number })
            }
            None => {
                self.reject(Rejection::InvalidMenuSelection)?;
                Ok(AtmState::WithdrawalMenu { account_number })
            }
        }
    }

    fn deposit_flow(&mut self, account_number: u32) -> Result<AtmState> {
        self.screen.display_message(DepositRequest::PROMPT)?;
        let cents = self.keypad.get_input()?;

        let amount = match DepositRequest::from_cents(cents) {
            DepositRequest::Amount(amount) => amount,
            DepositRequest::Cancel => {
                if cents < 0 {
                    warn!("Negative deposit of {} cents treated as cancel", cents);
                }
                self.screen.display_message_line("\nCanceling transaction...")?;
                return Ok(AtmState::MainMenu { account_number });
            }
        };

        self.screen
            .display_message("\nPlease insert a deposit envelope containing ")?;
        self.screen.display_dollar_amount(amount)?;
        self.screen.display_message_line(".")?;

        if self.deposit_slot.is_envelope_received() {
            if !self.deposit(account_number, amount) {
                return self.account_unavailable(account_number);
            }
            self.screen.display_message_line(
                "\nYour envelope has been received.\nNOTE: The money just deposited will not be available until we verify the amount of any enclosed cash and your checks clear.",
            )?;
        } else {
            debug!("No envelope received for account {}", account_number);
            self.screen.display_message_line(
                "\nYou did not insert an envelope, so the ATM has canceled your transaction.",
            )?;
        }
        Ok(AtmState::MainMenu { account_number })
    }

    /// Debits the account and dispenses `dollars` if both the account and the
    /// machine can cover it. Nothing changes on rejection.
    pub fn withdraw(
        &mut self,
        account_number: u32,
        dollars: u32,
    ) -> std::result::Result<(), Rejection> {
        let amount = Money::from_dollars(dollars);
        let available = self
            .bank_database
            .available_balance(account_number)
            .ok_or(Rejection::AccountNotFound)?;

        if amount > available {
            return Err(Rejection::InsufficientFunds);
        }
        if !self.cash_dispenser.is_sufficient_cash_available(dollars) {
            return Err(Rejection::InsufficientDispenserCash);
        }

        if !self.bank_database.debit(account_number, amount) {
            return Err(Rejection::AccountNotFound);
        }
        self.cash_dispenser.dispense_cash(dollars);
        debug!("Withdrew {} from account {}", amount, account_number);
        Ok(())
    }

    /// Credits a deposit to the account's total balance. Returns `false` if
    /// the account does not exist.
    #[must_use]
    pub fn deposit(&mut self, account_number: u32, amount: Money) -> bool {
        let credited = self.bank_database.credit(account_number, amount);
        if credited {
            debug!("Deposited {} to account {}", amount, account_number);
        }
        credited
    }
}
