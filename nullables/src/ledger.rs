//! Nullable ledger — in-memory balances with failure injection and a transfer log.

use election_ledger::{Ledger, LedgerError, MemoryLedger};
use election_types::{Address, Wei};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// A transfer that was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub from: Address,
    pub to: Address,
    pub amount: Wei,
}

/// A [`MemoryLedger`] that can be told to reject transfers.
#[derive(Debug, Default)]
pub struct NullLedger {
    inner: MemoryLedger,
    fail_next: AtomicBool,
    fail_all: AtomicBool,
    log: Mutex<Vec<TransferRecord>>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger where every listed account holds `amount`.
    pub fn funded<'a>(accounts: impl IntoIterator<Item = &'a Address>, amount: Wei) -> Self {
        Self {
            inner: MemoryLedger::with_balances(accounts.into_iter().map(|a| (a.clone(), amount))),
            ..Self::default()
        }
    }

    pub fn credit(&self, account: &Address, amount: Wei) {
        self.inner
            .credit(account, amount)
            .expect("null ledger credit overflow");
    }

    /// Reject the next transfer only.
    pub fn fail_next_transfer(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Reject every transfer until switched off.
    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    /// Applied transfers in order.
    pub fn transfers(&self) -> Vec<TransferRecord> {
        self.log.lock().unwrap().clone()
    }

    pub fn balance(&self, account: &Address) -> Wei {
        self.inner.balance_of(account).unwrap()
    }

    pub fn total_supply(&self) -> Wei {
        self.inner.total_supply().unwrap()
    }
}

impl Ledger for NullLedger {
    fn transfer(&self, from: &Address, to: &Address, amount: Wei) -> Result<(), LedgerError> {
        if self.fail_next.swap(false, Ordering::SeqCst) || self.fail_all.load(Ordering::SeqCst) {
            return Err(LedgerError::Rejected("injected failure".into()));
        }
        self.inner.transfer(from, to, amount)?;
        self.log.lock().unwrap().push(TransferRecord {
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    fn balance_of(&self, account: &Address) -> Result<Wei, LedgerError> {
        self.inner.balance_of(account)
    }
}
