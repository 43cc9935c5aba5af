//! Deposit envelope slot.

/// Acknowledges envelope insertion. There is no hardware behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositSlot {
    accepting: bool,
}

impl DepositSlot {
    pub fn new() -> Self {
        DepositSlot { accepting: true }
    }

    /// A slot where the customer never inserts an envelope.
    pub fn not_accepting() -> Self {
        DepositSlot { accepting: false }
    }

    pub fn is_envelope_received(&self) -> bool {
        self.accepting
    }
}

impl Default for DepositSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_receipt() {
        assert!(DepositSlot::new().is_envelope_received());
        assert!(!DepositSlot::not_accepting().is_envelope_received());
    }
}
