//! Pruned historical record of past exchanges.

use crate::memory::exchange::Exchange;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default prune threshold for the history log
pub const DEFAULT_CAPACITY: usize = 1000;

/// Unbounded-but-pruned record of every resolved exchange
///
/// Like [`ContextWindow`](crate::memory::context_window::ContextWindow) but
/// with a much larger capacity: the history tier searches an agent's whole
/// past, pruned oldest-first once the threshold is crossed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<Exchange>,
    capacity: usize,
}

impl HistoryLog {
    /// Create an empty log pruned at the given capacity (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append an exchange, pruning the oldest beyond capacity
    pub fn record(&mut self, exchange: Exchange) {
        self.entries.push_back(exchange);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Iterate exchanges newest-first
    pub fn iter_recent(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Query;
    use crate::knowledge::solution::Solution;
    use crate::knowledge::tier::Tier;

    #[test]
    fn test_prunes_oldest() {
        let mut log = HistoryLog::new(2);
        for n in 0..4 {
            log.record(Exchange::new(
                Query::new(format!("q{}", n)),
                Solution::none(Tier::History),
            ));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter_recent().next().unwrap().query.description(), "q3");
    }
}
