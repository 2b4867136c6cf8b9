//! Pool split between the winning candidate and the owner commission.

use crate::error::ElectionError;
use election_types::params::BPS_DENOMINATOR;
use election_types::Wei;

/// How a settled pool is divided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    pub winner_payout: Wei,
    pub commission: Wei,
}

/// Split `pool`, paying `winner_share_bps` (rounded down) to the winner.
///
/// The commission takes the rounding remainder, so
/// `winner_payout + commission == pool` always holds.
pub fn split_pool(pool: Wei, winner_share_bps: u32) -> Result<Split, ElectionError> {
    let share = u128::from(winner_share_bps.min(BPS_DENOMINATOR));
    let winner_payout = pool
        .raw()
        .checked_mul(share)
        .map(|scaled| Wei::new(scaled / u128::from(BPS_DENOMINATOR)))
        .ok_or(ElectionError::Overflow)?;
    Ok(Split {
        winner_payout,
        commission: pool - winner_payout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use election_types::ETHER;

    #[test]
    fn test_two_ether_pool() {
        let split = split_pool(Wei::ether(2), 9_000).unwrap();
        assert_eq!(split.winner_payout, Wei::new(18 * ETHER / 10));
        assert_eq!(split.commission, Wei::new(2 * ETHER / 10));
    }

    #[test]
    fn test_remainder_goes_to_commission() {
        let split = split_pool(Wei::new(19), 9_000).unwrap();
        assert_eq!(split.winner_payout, Wei::new(17));
        assert_eq!(split.commission, Wei::new(2));
    }

    #[test]
    fn test_empty_pool() {
        let split = split_pool(Wei::ZERO, 9_000).unwrap();
        assert!(split.winner_payout.is_zero());
        assert!(split.commission.is_zero());
    }

    #[test]
    fn test_share_is_capped_at_whole_pool() {
        let split = split_pool(Wei::new(100), 12_000).unwrap();
        assert_eq!(split.winner_payout, Wei::new(100));
        assert!(split.commission.is_zero());
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            split_pool(Wei::new(u128::MAX), 9_000),
            Err(ElectionError::Overflow)
        );
    }
}
