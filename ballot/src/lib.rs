//! Staked ballot registry.
//!
//! Each ballot is keyed by a topic string and moves through a fixed lifecycle:
//! Open (candidates added, stakes accepted for the voting window) → Finished
//! (winner paid its share of the pool) → Drained (owner commission withdrawn).
//!
//! Staked value sits in an escrow account on the external [`Ledger`] until
//! settlement. Every transition that moves value performs the ledger transfer
//! before committing state, under the ballot's lock, so a failed transfer
//! leaves the ballot untouched.
//!
//! [`Ledger`]: election_ledger::Ledger

pub mod ballot;
pub mod config;
pub mod error;
pub mod registry;
pub mod settlement;

pub use ballot::Ballot;
pub use config::RegistryConfig;
pub use error::ElectionError;
pub use registry::{BallotRegistry, STAT_NAMES};
pub use settlement::{split_pool, Split};
