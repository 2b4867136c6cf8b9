//! Nullable infrastructure for deterministic testing.
//!
//! The registry's external collaborators (clock and ledger) are abstracted
//! behind traits. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record what happened so tests can assert on it
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod ledger;

pub use clock::NullClock;
pub use ledger::{NullLedger, TransferRecord};
