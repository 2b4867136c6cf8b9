use election_ledger::LedgerError;
use election_types::{Address, Wei};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElectionError {
    #[error("{0} is not the registry owner")]
    Unauthorized(Address),

    #[error("ballot {0} already exists")]
    TopicAlreadyExists(String),

    #[error("ballot {0} not found")]
    NotFound(String),

    #[error("candidate {0} is already registered")]
    DuplicateCandidate(Address),

    #[error("voting window has closed")]
    VotingClosed,

    #[error("candidate {0} is not registered")]
    UnknownCandidate(Address),

    #[error("{0} has already voted in this ballot")]
    AlreadyVoted(Address),

    #[error("insufficient stake: offered {offered}, required {required}")]
    InsufficientStake { offered: Wei, required: Wei },

    #[error("ballot {0} has already finished")]
    AlreadyFinished(String),

    #[error("voting window is still open")]
    VotingStillOpen,

    #[error("ballot has no candidates")]
    NoCandidates,

    #[error("ballot {0} has not finished")]
    NotFinished(String),

    #[error("no commission left to withdraw")]
    NothingToWithdraw,

    #[error("escrow account {0} cannot take part in a ballot")]
    EscrowAccount(Address),

    #[error("arithmetic overflow in stake accounting")]
    Overflow,

    #[error("registry lock poisoned")]
    Poisoned,

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("config error: {0}")]
    Config(String),
}
