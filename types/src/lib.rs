//! Fundamental types for the staked ballot registry.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account addresses, value amounts, timestamps and the clock abstraction, and
//! the tunable election parameters.

pub mod address;
pub mod amount;
pub mod error;
pub mod params;
pub mod time;

pub use address::Address;
pub use amount::{Wei, ETHER};
pub use error::ElectionTypesError;
pub use params::ElectionParams;
pub use time::{Clock, SystemClock, Timestamp};
