//! Value ledger consumed by the ballot registry.
//!
//! The registry never owns balances. It moves value between accounts through
//! the [`Ledger`] trait, which must apply each transfer atomically: either the
//! full amount moves or nothing does.

pub mod error;
pub mod ledger;
pub mod memory;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use memory::MemoryLedger;
