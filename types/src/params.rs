//! Election parameters — the voting window, minimum stake and settlement split.

use crate::amount::Wei;
use serde::{Deserialize, Serialize};

/// Basis points in 100%.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Tunable parameters shared by every ballot in a registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionParams {
    /// How long votes are accepted after a ballot starts.
    /// Default: 3 days = 259_200 seconds.
    #[serde(default = "default_voting_window_secs")]
    pub voting_window_secs: u64,

    /// Smallest stake accepted with a vote, in wei.
    /// Default: 0.01 ether.
    #[serde(default = "default_min_stake")]
    pub min_stake: Wei,

    /// Share of the pool paid to the winning candidate (basis points).
    /// The remainder is the owner commission.
    #[serde(default = "default_winner_share_bps")]
    pub winner_share_bps: u32,
}

impl ElectionParams {
    pub const DEFAULT_VOTING_WINDOW_SECS: u64 = 3 * 24 * 3600;
    pub const DEFAULT_MIN_STAKE: Wei = Wei::milli_ether(10);
    pub const DEFAULT_WINNER_SHARE_BPS: u32 = 9_000; // 90%

    /// Commission share of the pool (basis points).
    pub fn commission_bps(&self) -> u32 {
        BPS_DENOMINATOR.saturating_sub(self.winner_share_bps)
    }
}

fn default_voting_window_secs() -> u64 {
    ElectionParams::DEFAULT_VOTING_WINDOW_SECS
}

fn default_min_stake() -> Wei {
    ElectionParams::DEFAULT_MIN_STAKE
}

fn default_winner_share_bps() -> u32 {
    ElectionParams::DEFAULT_WINNER_SHARE_BPS
}

impl Default for ElectionParams {
    fn default() -> Self {
        Self {
            voting_window_secs: default_voting_window_secs(),
            min_stake: default_min_stake(),
            winner_share_bps: default_winner_share_bps(),
        }
    }
}
