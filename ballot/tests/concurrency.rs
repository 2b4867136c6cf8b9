//! Same-topic operations serialize; different topics proceed independently.

use election_ballot::{BallotRegistry, ElectionError};
use election_nullables::{NullClock, NullLedger};
use election_types::{Address, ElectionParams, Wei};
use std::thread;

fn addr(name: &str) -> Address {
    Address::new(name)
}

fn voters(n: usize) -> Vec<Address> {
    (0..n).map(|i| addr(&format!("voter{i}"))).collect()
}

fn registry_with(voters: &[Address]) -> BallotRegistry<NullLedger, NullClock> {
    let mut funded = voters.to_vec();
    funded.push(addr("owner"));
    BallotRegistry::new(
        addr("owner"),
        addr("escrow"),
        ElectionParams::default(),
        NullLedger::funded(funded.iter(), Wei::ether(10)),
        NullClock::new(0),
    )
}

#[test]
fn test_concurrent_votes_on_one_topic_are_all_counted() {
    let voters = voters(32);
    let registry = registry_with(&voters);
    registry.start_ballot(&addr("owner"), "Test").unwrap();
    registry
        .add_candidate(&addr("owner"), "Test", &addr("a"))
        .unwrap();
    registry
        .add_candidate(&addr("owner"), "Test", &addr("b"))
        .unwrap();

    thread::scope(|s| {
        for (i, voter) in voters.iter().enumerate() {
            let registry = &registry;
            s.spawn(move || {
                let candidate = if i % 2 == 0 { addr("a") } else { addr("b") };
                registry
                    .vote(voter, "Test", &candidate, Wei::ether(1))
                    .unwrap();
            });
        }
    });

    assert_eq!(registry.pool("Test").unwrap(), Wei::ether(32));
    assert_eq!(registry.stake_of("Test", &addr("a")).unwrap(), Wei::ether(16));
    assert_eq!(registry.ledger().balance(&addr("escrow")), Wei::ether(32));
}

#[test]
fn test_concurrent_double_vote_accepts_exactly_one() {
    let voters = voters(1);
    let registry = registry_with(&voters);
    registry.start_ballot(&addr("owner"), "Test").unwrap();
    registry
        .add_candidate(&addr("owner"), "Test", &addr("a"))
        .unwrap();

    let results: Vec<Result<(), ElectionError>> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = &registry;
                let voter = &voters[0];
                s.spawn(move || registry.vote(voter, "Test", &addr("a"), Wei::ether(1)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == ElectionError::AlreadyVoted(voters[0].clone())));
    assert_eq!(registry.ledger().balance(&addr("escrow")), Wei::ether(1));
}

#[test]
fn test_concurrent_finish_settles_once() {
    let voters = voters(4);
    let registry = registry_with(&voters);
    registry.start_ballot(&addr("owner"), "Test").unwrap();
    registry
        .add_candidate(&addr("owner"), "Test", &addr("a"))
        .unwrap();
    for voter in &voters {
        registry
            .vote(voter, "Test", &addr("a"), Wei::ether(1))
            .unwrap();
    }
    registry.clock().advance(ElectionParams::DEFAULT_VOTING_WINDOW_SECS);

    let results: Vec<Result<Address, ElectionError>> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = &registry;
                s.spawn(move || registry.finish(&addr("owner"), "Test"))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        registry.ledger().balance(&addr("a")),
        Wei::parse_ether("3.6").unwrap()
    );
    assert_eq!(
        registry.ledger().balance(&addr("escrow")),
        Wei::parse_ether("0.4").unwrap()
    );
}

#[test]
fn test_concurrent_ballot_creation_on_distinct_topics() {
    let registry = registry_with(&[]);
    thread::scope(|s| {
        for i in 0..16 {
            let registry = &registry;
            s.spawn(move || {
                registry
                    .start_ballot(&addr("owner"), &format!("topic{i:02}"))
                    .unwrap();
            });
        }
    });
    let topics = registry.topics().unwrap();
    assert_eq!(topics.len(), 16);
    assert_eq!(topics[0], "topic00");
}

#[test]
fn test_concurrent_creation_of_same_topic_accepts_one() {
    let registry = registry_with(&[]);
    let results: Vec<Result<(), ElectionError>> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = &registry;
                s.spawn(move || registry.start_ballot(&addr("owner"), "Test"))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
}
