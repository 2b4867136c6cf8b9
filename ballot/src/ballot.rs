//! A single ballot and its standings.

use crate::error::ElectionError;
use election_types::{Address, Timestamp, Wei};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One voting campaign, keyed by topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub topic: String,
    /// When the voting window opened.
    pub started_at: Timestamp,
    /// Registered candidates in insertion order.
    pub candidates: Vec<Address>,
    /// Cumulative stake per candidate.
    pub stake_by_candidate: HashMap<Address, Wei>,
    /// Voters who have already cast their one vote.
    pub has_voted: HashSet<Address>,
    pub finished: bool,
    /// Set at settlement.
    pub winner: Option<Address>,
    pub winner_payout: Wei,
    /// Commission reserved for the owner and not yet withdrawn.
    pub commission_owed: Wei,
    /// Commission already moved out by a withdrawal.
    pub commission_paid: Wei,
}

impl Ballot {
    pub fn new(topic: impl Into<String>, started_at: Timestamp) -> Self {
        Self {
            topic: topic.into(),
            started_at,
            candidates: Vec::new(),
            stake_by_candidate: HashMap::new(),
            has_voted: HashSet::new(),
            finished: false,
            winner: None,
            winner_payout: Wei::ZERO,
            commission_owed: Wei::ZERO,
            commission_paid: Wei::ZERO,
        }
    }

    pub fn has_candidate(&self, candidate: &Address) -> bool {
        self.stake_by_candidate.contains_key(candidate)
    }

    pub fn has_voted(&self, voter: &Address) -> bool {
        self.has_voted.contains(voter)
    }

    pub fn stake_of(&self, candidate: &Address) -> Option<Wei> {
        self.stake_by_candidate.get(candidate).copied()
    }

    /// Votes are accepted while `now < started_at + window_secs`.
    pub fn is_voting_open(&self, window_secs: u64, now: Timestamp) -> bool {
        !self.started_at.has_expired(window_secs, now)
    }

    /// Total value staked so far.
    pub fn pool(&self) -> Result<Wei, ElectionError> {
        self.stake_by_candidate
            .values()
            .try_fold(Wei::ZERO, |acc, stake| acc.checked_add(*stake))
            .ok_or(ElectionError::Overflow)
    }

    /// Candidate with the largest stake.
    ///
    /// Ties go to the candidate registered first. `None` when there are no
    /// candidates.
    pub fn leader(&self) -> Option<&Address> {
        let mut best: Option<(&Address, Wei)> = None;
        for candidate in &self.candidates {
            let stake = self.stake_of(candidate).unwrap_or_default();
            match best {
                Some((_, top)) if stake <= top => {}
                _ => best = Some((candidate, stake)),
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    pub(crate) fn push_candidate(&mut self, candidate: Address) -> Result<(), ElectionError> {
        if self.has_candidate(&candidate) {
            return Err(ElectionError::DuplicateCandidate(candidate));
        }
        self.stake_by_candidate.insert(candidate.clone(), Wei::ZERO);
        self.candidates.push(candidate);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(name: &str) -> Address {
        Address::new(name)
    }

    fn ballot_with(stakes: &[(&str, u128)]) -> Ballot {
        let mut ballot = Ballot::new("Test", Timestamp::new(1_000));
        for (name, stake) in stakes {
            ballot.push_candidate(addr(name)).unwrap();
            ballot
                .stake_by_candidate
                .insert(addr(name), Wei::new(*stake));
        }
        ballot
    }

    #[test]
    fn test_leader_picks_largest_stake() {
        let ballot = ballot_with(&[("a", 1), ("b", 3), ("c", 2)]);
        assert_eq!(ballot.leader(), Some(&addr("b")));
    }

    #[test]
    fn test_leader_tie_goes_to_first_registered() {
        let ballot = ballot_with(&[("a", 1), ("b", 5), ("c", 5)]);
        assert_eq!(ballot.leader(), Some(&addr("b")));
    }

    #[test]
    fn test_leader_with_no_stakes_is_first_candidate() {
        let ballot = ballot_with(&[("a", 0), ("b", 0)]);
        assert_eq!(ballot.leader(), Some(&addr("a")));
    }

    #[test]
    fn test_leader_without_candidates() {
        let ballot = Ballot::new("Test", Timestamp::new(0));
        assert_eq!(ballot.leader(), None);
    }

    #[test]
    fn test_duplicate_candidate_rejected() {
        let mut ballot = Ballot::new("Test", Timestamp::new(0));
        ballot.push_candidate(addr("a")).unwrap();
        assert_eq!(
            ballot.push_candidate(addr("a")),
            Err(ElectionError::DuplicateCandidate(addr("a")))
        );
        assert_eq!(ballot.candidates.len(), 1);
    }

    #[test]
    fn test_pool_sums_stakes() {
        let ballot = ballot_with(&[("a", 10), ("b", 32)]);
        assert_eq!(ballot.pool().unwrap(), Wei::new(42));
    }

    #[test]
    fn test_pool_overflow() {
        let ballot = ballot_with(&[("a", u128::MAX), ("b", 1)]);
        assert_eq!(ballot.pool(), Err(ElectionError::Overflow));
    }

    #[test]
    fn test_voting_window_boundary() {
        let ballot = Ballot::new("Test", Timestamp::new(1_000));
        assert!(ballot.is_voting_open(100, Timestamp::new(1_099)));
        assert!(!ballot.is_voting_open(100, Timestamp::new(1_100)));
    }
}
