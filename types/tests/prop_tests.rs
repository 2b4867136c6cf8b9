use proptest::prelude::*;

use election_types::{Timestamp, Wei, ETHER};

proptest! {
    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// A window has expired exactly when `now >= start + duration`.
    #[test]
    fn window_expiry_matches_arithmetic(
        start in 0u64..1_000_000_000,
        duration in 0u64..1_000_000,
        now in 0u64..2_000_000_000,
    ) {
        let expired = Timestamp::new(start).has_expired(duration, Timestamp::new(now));
        prop_assert_eq!(expired, now >= start + duration);
    }

    /// Whole and milli units parse back to the same raw value.
    #[test]
    fn parse_ether_matches_constructors(whole in 0u128..1_000_000, milli in 0u128..1_000) {
        let s = format!("{}.{:03}", whole, milli);
        let parsed = Wei::parse_ether(&s).unwrap();
        prop_assert_eq!(parsed.raw(), whole * ETHER + milli * (ETHER / 1_000));
    }

    /// checked_sub never succeeds below zero.
    #[test]
    fn wei_checked_sub(a in 0u128..u128::MAX, b in 0u128..u128::MAX) {
        let r = Wei::new(a).checked_sub(Wei::new(b));
        prop_assert_eq!(r.is_some(), a >= b);
    }
}
