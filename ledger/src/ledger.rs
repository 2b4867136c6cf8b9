//! Ledger trait — the value-transfer boundary.

use crate::LedgerError;
use election_types::{Address, Wei};
use std::sync::Arc;

/// Atomic value movement between accounts.
///
/// Implementors must guarantee that a failed `transfer` leaves every balance
/// unchanged.
pub trait Ledger: Send + Sync {
    /// Move `amount` from `from` to `to`.
    fn transfer(&self, from: &Address, to: &Address, amount: Wei) -> Result<(), LedgerError>;

    /// Current balance of `account` (zero for unknown accounts).
    fn balance_of(&self, account: &Address) -> Result<Wei, LedgerError>;
}

impl<L: Ledger + ?Sized> Ledger for Arc<L> {
    fn transfer(&self, from: &Address, to: &Address, amount: Wei) -> Result<(), LedgerError> {
        (**self).transfer(from, to, amount)
    }

    fn balance_of(&self, account: &Address) -> Result<Wei, LedgerError> {
        (**self).balance_of(account)
    }
}
