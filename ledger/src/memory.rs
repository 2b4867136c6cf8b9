//! In-memory ledger — thread-safe account balances held for the process lifetime.

use crate::{Ledger, LedgerError};
use election_types::{Address, Wei};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Account balances behind a single mutex.
///
/// Every transfer checks and applies both sides while holding the lock, so a
/// transfer is all-or-nothing.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: Mutex<HashMap<Address, Wei>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with initial balances.
    pub fn with_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = (Address, Wei)>,
    {
        Self {
            balances: Mutex::new(balances.into_iter().collect()),
        }
    }

    /// Mint `amount` into `account` (genesis funding, test setup).
    pub fn credit(&self, account: &Address, amount: Wei) -> Result<(), LedgerError> {
        let mut balances = self.lock()?;
        let balance = balances.entry(account.clone()).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(account.clone()))?;
        Ok(())
    }

    /// Sum of all balances.
    pub fn total_supply(&self) -> Result<Wei, LedgerError> {
        Ok(self.lock()?.values().sum())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Address, Wei>>, LedgerError> {
        self.balances.lock().map_err(|_| LedgerError::Poisoned)
    }
}

impl Ledger for MemoryLedger {
    fn transfer(&self, from: &Address, to: &Address, amount: Wei) -> Result<(), LedgerError> {
        if from == to {
            return Err(LedgerError::SelfTransfer);
        }
        let mut balances = self.lock()?;
        let available = balances.get(from).copied().unwrap_or_default();
        let remaining = available
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientFunds {
                account: from.clone(),
                needed: amount,
                available,
            })?;
        let credited = balances
            .get(to)
            .copied()
            .unwrap_or_default()
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(to.clone()))?;
        balances.insert(from.clone(), remaining);
        balances.insert(to.clone(), credited);
        tracing::trace!(%from, %to, %amount, "ledger transfer applied");
        Ok(())
    }

    fn balance_of(&self, account: &Address) -> Result<Wei, LedgerError> {
        Ok(self.lock()?.get(account).copied().unwrap_or_default())
    }
}
