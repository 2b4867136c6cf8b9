//! Operation counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe set of named counters, fixed at construction.
pub struct StatsCounter {
    counters: HashMap<&'static str, AtomicU64>,
}

impl StatsCounter {
    pub fn new(names: &[&'static str]) -> Self {
        let mut counters = HashMap::new();
        for &name in names {
            counters.insert(name, AtomicU64::new(0));
        }
        Self { counters }
    }

    /// Unknown names are ignored.
    pub fn increment(&self, name: &str) {
        if let Some(counter) = self.counters.get(name) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counters
            .get(name)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_known_names_only() {
        let stats = StatsCounter::new(&["votes", "finishes"]);
        stats.increment("votes");
        stats.increment("votes");
        stats.increment("unknown");
        assert_eq!(stats.get("votes"), 2);
        assert_eq!(stats.get("finishes"), 0);
        assert_eq!(stats.get("unknown"), 0);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let stats = StatsCounter::new(&["votes"]);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..250 {
                        stats.increment("votes");
                    }
                });
            }
        });
        assert_eq!(stats.get("votes"), 1000);
    }
}
