//! Account identity type.

use crate::error::ElectionTypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An account identity as supplied by the external account system.
///
/// The registry treats addresses as opaque: owners, voters, candidates and the
/// escrow account are all just `Address` values compared by equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Create an address from a known-good literal, for tests and constants.
    ///
    /// # Panics
    /// Panics if the string is empty or contains whitespace. Anything that
    /// comes from config or a caller goes through [`Address::parse`] instead.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(Self::well_formed(&s), "address must be non-empty without whitespace");
        Self(s)
    }

    /// Parse an address, rejecting empty or whitespace-bearing strings.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ElectionTypesError> {
        let s = raw.into();
        if Self::well_formed(&s) {
            Ok(Self(s))
        } else {
            Err(ElectionTypesError::InvalidAddress(s))
        }
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn well_formed(s: &str) -> bool {
        !s.is_empty() && !s.chars().any(char::is_whitespace)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = ElectionTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ElectionTypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}
