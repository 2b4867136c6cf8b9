use election_types::{Address, Wei};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds in {account}: need {needed}, have {available}")]
    InsufficientFunds {
        account: Address,
        needed: Wei,
        available: Wei,
    },

    #[error("cannot transfer from an account to itself")]
    SelfTransfer,

    #[error("balance overflow crediting {0}")]
    Overflow(Address),

    #[error("transfer rejected: {0}")]
    Rejected(String),

    #[error("ledger lock poisoned")]
    Poisoned,
}
