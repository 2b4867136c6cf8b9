//! Ballot registry — owns every ballot and dispatches all operations.
//!
//! The topic map sits behind an `RwLock`; each ballot sits behind its own
//! `Mutex`. Creating a topic takes the write lock. Every other operation clones
//! the ballot handle under the read lock and then holds that ballot's mutex for
//! its whole duration, ledger transfer included. Operations on one topic are
//! therefore serialized while different topics proceed independently.

use crate::ballot::Ballot;
use crate::config::RegistryConfig;
use crate::error::ElectionError;
use crate::settlement::split_pool;
use election_ledger::Ledger;
use election_types::{Address, Clock, ElectionParams, Wei};
use election_utils::{format_duration, StatsCounter};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// Counters maintained by every registry.
pub const STAT_NAMES: &[&str] = &[
    "ballots_started",
    "candidates_added",
    "votes_cast",
    "ballots_finished",
    "commissions_withdrawn",
];

type BallotHandle = Arc<Mutex<Ballot>>;

/// The registry of all ballots, administered by a single owner.
pub struct BallotRegistry<L, C> {
    owner: Address,
    escrow: Address,
    params: ElectionParams,
    ledger: L,
    clock: C,
    ballots: RwLock<HashMap<String, BallotHandle>>,
    stats: StatsCounter,
}

impl<L: Ledger, C: Clock> BallotRegistry<L, C> {
    pub fn new(
        owner: Address,
        escrow: Address,
        params: ElectionParams,
        ledger: L,
        clock: C,
    ) -> Self {
        Self {
            owner,
            escrow,
            params,
            ledger,
            clock,
            ballots: RwLock::new(HashMap::new()),
            stats: StatsCounter::new(STAT_NAMES),
        }
    }

    /// Build a registry from a validated config.
    pub fn from_config(
        config: &RegistryConfig,
        ledger: L,
        clock: C,
    ) -> Result<Self, ElectionError> {
        config.validate()?;
        Ok(Self::new(
            config.owner.clone(),
            config.escrow.clone(),
            config.params.clone(),
            ledger,
            clock,
        ))
    }

    /// Open a new ballot for `topic`. Owner only.
    pub fn start_ballot(&self, caller: &Address, topic: &str) -> Result<(), ElectionError> {
        self.ensure_owner(caller)?;
        let now = self.clock.now();
        let mut ballots = self.ballots.write().map_err(|_| ElectionError::Poisoned)?;
        match ballots.entry(topic.to_string()) {
            Entry::Occupied(_) => Err(ElectionError::TopicAlreadyExists(topic.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(Ballot::new(topic, now))));
                self.stats.increment("ballots_started");
                tracing::info!(
                    topic,
                    started_at = %now,
                    "ballot started, voting open for {}",
                    format_duration(self.params.voting_window_secs)
                );
                Ok(())
            }
        }
    }

    /// Register `candidate` on an unfinished ballot.
    ///
    /// Open to any caller, not only the owner. The escrow account is refused.
    pub fn add_candidate(
        &self,
        caller: &Address,
        topic: &str,
        candidate: &Address,
    ) -> Result<(), ElectionError> {
        let handle = self.handle(topic)?;
        let mut ballot = lock(&handle)?;
        if ballot.finished {
            return Err(ElectionError::AlreadyFinished(topic.to_string()));
        }
        self.ensure_not_escrow(candidate)?;
        ballot.push_candidate(candidate.clone())?;
        self.stats.increment("candidates_added");
        tracing::debug!(topic, %caller, %candidate, "candidate added");
        Ok(())
    }

    /// Stake `stake` from `caller` on `candidate`.
    ///
    /// Preconditions are checked in order: window open, candidate known, caller
    /// has not voted, stake at least the minimum, caller is not the escrow. The
    /// stake moves into escrow before any standings change.
    pub fn vote(
        &self,
        caller: &Address,
        topic: &str,
        candidate: &Address,
        stake: Wei,
    ) -> Result<(), ElectionError> {
        let handle = self.handle(topic)?;
        let mut ballot = lock(&handle)?;

        if !ballot.is_voting_open(self.params.voting_window_secs, self.clock.now()) {
            return Err(ElectionError::VotingClosed);
        }
        let current = ballot
            .stake_of(candidate)
            .ok_or_else(|| ElectionError::UnknownCandidate(candidate.clone()))?;
        if ballot.has_voted(caller) {
            return Err(ElectionError::AlreadyVoted(caller.clone()));
        }
        if stake < self.params.min_stake {
            return Err(ElectionError::InsufficientStake {
                offered: stake,
                required: self.params.min_stake,
            });
        }
        self.ensure_not_escrow(caller)?;
        let updated = current.checked_add(stake).ok_or(ElectionError::Overflow)?;
        ballot
            .pool()?
            .checked_add(stake)
            .ok_or(ElectionError::Overflow)?;

        self.ledger
            .transfer(caller, &self.escrow, stake)
            .inspect_err(|e| tracing::warn!(topic, %caller, "stake transfer failed: {e}"))?;

        ballot.stake_by_candidate.insert(candidate.clone(), updated);
        ballot.has_voted.insert(caller.clone());
        self.stats.increment("votes_cast");
        tracing::debug!(topic, voter = %caller, %candidate, %stake, "vote recorded");
        Ok(())
    }

    /// Close the ballot and pay the winner. Owner only, after the window.
    ///
    /// Returns the winning candidate.
    pub fn finish(&self, caller: &Address, topic: &str) -> Result<Address, ElectionError> {
        self.ensure_owner(caller)?;
        let handle = self.handle(topic)?;
        let mut ballot = lock(&handle)?;

        if ballot.finished {
            return Err(ElectionError::AlreadyFinished(topic.to_string()));
        }
        if ballot.is_voting_open(self.params.voting_window_secs, self.clock.now()) {
            return Err(ElectionError::VotingStillOpen);
        }
        let winner = ballot.leader().cloned().ok_or(ElectionError::NoCandidates)?;
        let pool = ballot.pool()?;
        let split = split_pool(pool, self.params.winner_share_bps)?;

        if !split.winner_payout.is_zero() {
            self.ledger
                .transfer(&self.escrow, &winner, split.winner_payout)
                .inspect_err(|e| tracing::warn!(topic, %winner, "winner payout failed: {e}"))?;
        }

        ballot.finished = true;
        ballot.winner = Some(winner.clone());
        ballot.winner_payout = split.winner_payout;
        ballot.commission_owed = split.commission;
        self.stats.increment("ballots_finished");
        tracing::info!(
            topic,
            %winner,
            %pool,
            payout = %split.winner_payout,
            commission = %split.commission,
            "ballot finished"
        );
        Ok(winner)
    }

    /// Move the owner commission of a finished ballot to `destination`.
    ///
    /// Returns the amount withdrawn.
    pub fn withdrawal(
        &self,
        caller: &Address,
        topic: &str,
        destination: &Address,
    ) -> Result<Wei, ElectionError> {
        self.ensure_owner(caller)?;
        let handle = self.handle(topic)?;
        let mut ballot = lock(&handle)?;

        if !ballot.finished {
            return Err(ElectionError::NotFinished(topic.to_string()));
        }
        let amount = ballot.commission_owed;
        if amount.is_zero() {
            return Err(ElectionError::NothingToWithdraw);
        }
        self.ensure_not_escrow(destination)?;

        self.ledger
            .transfer(&self.escrow, destination, amount)
            .inspect_err(|e| {
                tracing::warn!(topic, %destination, "commission transfer failed: {e}")
            })?;

        ballot.commission_owed = Wei::ZERO;
        ballot.commission_paid = amount;
        self.stats.increment("commissions_withdrawn");
        tracing::info!(topic, %destination, %amount, "commission withdrawn");
        Ok(amount)
    }

    /// Current leader of `topic`, before or after settlement.
    pub fn get_winner(&self, topic: &str) -> Result<Address, ElectionError> {
        self.read(topic, |ballot| {
            ballot.leader().cloned().ok_or(ElectionError::NoCandidates)
        })?
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn escrow(&self) -> &Address {
        &self.escrow
    }

    pub fn params(&self) -> &ElectionParams {
        &self.params
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn stats(&self) -> &StatsCounter {
        &self.stats
    }

    /// A copy of the ballot's full state.
    pub fn ballot(&self, topic: &str) -> Result<Ballot, ElectionError> {
        self.read(topic, Ballot::clone)
    }

    /// All topics, sorted.
    pub fn topics(&self) -> Result<Vec<String>, ElectionError> {
        let ballots = self.ballots.read().map_err(|_| ElectionError::Poisoned)?;
        let mut topics: Vec<String> = ballots.keys().cloned().collect();
        topics.sort();
        Ok(topics)
    }

    pub fn candidates(&self, topic: &str) -> Result<Vec<Address>, ElectionError> {
        self.read(topic, |ballot| ballot.candidates.clone())
    }

    pub fn stake_of(&self, topic: &str, candidate: &Address) -> Result<Wei, ElectionError> {
        self.read(topic, |ballot| {
            ballot
                .stake_of(candidate)
                .ok_or_else(|| ElectionError::UnknownCandidate(candidate.clone()))
        })?
    }

    pub fn has_voted(&self, topic: &str, voter: &Address) -> Result<bool, ElectionError> {
        self.read(topic, |ballot| ballot.has_voted(voter))
    }

    pub fn pool(&self, topic: &str) -> Result<Wei, ElectionError> {
        self.read(topic, Ballot::pool)?
    }

    pub fn commission_owed(&self, topic: &str) -> Result<Wei, ElectionError> {
        self.read(topic, |ballot| ballot.commission_owed)
    }

    pub fn is_voting_open(&self, topic: &str) -> Result<bool, ElectionError> {
        let now = self.clock.now();
        self.read(topic, |ballot| {
            ballot.is_voting_open(self.params.voting_window_secs, now)
        })
    }

    fn ensure_owner(&self, caller: &Address) -> Result<(), ElectionError> {
        if *caller != self.owner {
            tracing::debug!(%caller, "rejected non-owner call");
            return Err(ElectionError::Unauthorized(caller.clone()));
        }
        Ok(())
    }

    /// The escrow account cannot be a candidate, voter or payout destination:
    /// any transfer it would take part in is a self-transfer.
    fn ensure_not_escrow(&self, account: &Address) -> Result<(), ElectionError> {
        if *account == self.escrow {
            return Err(ElectionError::EscrowAccount(account.clone()));
        }
        Ok(())
    }

    fn handle(&self, topic: &str) -> Result<BallotHandle, ElectionError> {
        let ballots = self.ballots.read().map_err(|_| ElectionError::Poisoned)?;
        ballots
            .get(topic)
            .cloned()
            .ok_or_else(|| ElectionError::NotFound(topic.to_string()))
    }

    fn read<T>(&self, topic: &str, f: impl FnOnce(&Ballot) -> T) -> Result<T, ElectionError> {
        let handle = self.handle(topic)?;
        let ballot = lock(&handle)?;
        Ok(f(&*ballot))
    }
}

fn lock(handle: &Mutex<Ballot>) -> Result<MutexGuard<'_, Ballot>, ElectionError> {
    handle.lock().map_err(|_| ElectionError::Poisoned)
}
