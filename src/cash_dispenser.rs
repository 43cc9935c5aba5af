//! Cash dispenser inventory.

use log::debug;

/// Bills loaded into a fresh machine.
pub const INITIAL_BILL_COUNT: u32 = 500;

/// Value of each bill in whole dollars.
pub const BILL_DENOMINATION: u32 = 20;

/// Tracks the bills left in the machine.
///
/// All amounts are whole dollars. An amount that is not a multiple of the
/// denomination needs `amount / denomination` bills (integer division).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashDispenser {
    bill_count: u32,
    denomination: u32,
}

impl CashDispenser {
    /// A dispenser holding the default inventory of $20 bills.
    pub fn new() -> Self {
        Self::with_inventory(INITIAL_BILL_COUNT, BILL_DENOMINATION)
    }

    /// A dispenser with an explicit inventory. A zero denomination is
    /// bumped to one dollar.
    pub fn with_inventory(bill_count: u32, denomination: u32) -> Self {
        CashDispenser {
            bill_count,
            denomination: denomination.max(1),
        }
    }

    pub fn bill_count(&self) -> u32 {
        self.bill_count
    }

    pub fn denomination(&self) -> u32 {
        self.denomination
    }

    fn bills_required(&self, amount: u32) -> u32 {
        amount / self.denomination
    }

    /// Returns `true` if the machine holds enough bills for `amount`.
    pub fn is_sufficient_cash_available(&self, amount: u32) -> bool {
        self.bills_required(amount) <= self.bill_count
    }

    /// Removes the bills for `amount` from the inventory.
    ///
    /// The caller must check [`CashDispenser::is_sufficient_cash_available`]
    /// first; an oversized request empties the dispenser.
    pub fn dispense_cash(&mut self, amount: u32) {
        let bills = self.bills_required(amount);
        self.bill_count = self.bill_count.saturating_sub(bills);
        debug!(
            "Dispensed {} bills of ${}, {} remaining",
            bills, self.denomination, self.bill_count
        );
    }
}

impl Default for CashDispenser {
    fn default() -> Self {
        Self::new()
    }
}
