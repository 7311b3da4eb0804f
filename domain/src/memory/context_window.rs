//! Bounded window of an agent's most recent activity.

use crate::memory::exchange::Exchange;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of exchanges kept in the local context window
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded, append-then-trim window of recent exchanges
///
/// The local tier matches against this window. Appends evict the oldest
/// entry once the configured capacity is exceeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextWindow {
    entries: VecDeque<Exchange>,
    capacity: usize,
}

impl ContextWindow {
    /// Create an empty window with the given capacity (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append an exchange, evicting the oldest beyond capacity
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

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
