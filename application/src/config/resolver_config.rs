//! Resolver configuration — per-agent escalation control.
//!
//! [`ResolverConfig`] groups the recognized per-agent options: the
//! confidence bar, memory capacities, fan-out limit, and latency budgets.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("confidence_threshold must be in [0.0, 1.0], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("{0} must be greater than zero")]
    ZeroCapacity(&'static str),
}

/// Per-agent escalation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Confidence bar at which escalation stops
    pub confidence_threshold: f64,
    /// Capacity of the local context window
    pub local_context_capacity: usize,
    /// Prune threshold for the history log
    pub history_capacity: usize,
    /// Maximum peers queried during collaboration fan-out
    pub peer_fanout_limit: usize,
    /// Wall-clock budget for the whole escalation walk, in milliseconds
    pub total_budget_ms: u64,
    /// Independent per-peer timeout during fan-out, in milliseconds
    pub peer_timeout_ms: u64,
    /// Timeout for the single network fetch, in milliseconds
    pub network_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.85,
            local_context_capacity: 10,
            history_capacity: 1000,
            peer_fanout_limit: 3,
            total_budget_ms: 300,
            peer_timeout_ms: 100,
            network_timeout_ms: 100,
        }
    }
}

impl ResolverConfig {
    /// Check the option invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.confidence_threshold));
        }
        if self.local_context_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("local_context_capacity"));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("history_capacity"));
        }
        if self.peer_fanout_limit == 0 {
            return Err(ConfigError::ZeroCapacity("peer_fanout_limit"));
        }
        Ok(())
    }

    /// Total budget as a [`Duration`]
    pub fn total_budget(&self) -> Duration {
        Duration::from_millis(self.total_budget_ms)
    }

    /// Per-peer timeout as a [`Duration`]
    pub fn peer_timeout(&self) -> Duration {
        Duration::from_millis(self.peer_timeout_ms)
    }

    /// Network timeout as a [`Duration`]
    pub fn network_timeout(&self) -> Duration {
        Duration::from_millis(self.network_timeout_ms)
    }

    // ==================== Builder Methods ====================

    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_local_context_capacity(mut self, capacity: usize) -> Self {
        self.local_context_capacity = capacity;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_peer_fanout_limit(mut self, limit: usize) -> Self {
        self.peer_fanout_limit = limit;
        self
    }

    pub fn with_total_budget_ms(mut self, ms: u64) -> Self {
        self.total_budget_ms = ms;
        self
    }

    pub fn with_peer_timeout_ms(mut self, ms: u64) -> Self {
        self.peer_timeout_ms = ms;
        self
    }

    pub fn with_network_timeout_ms(mut self, ms: u64) -> Self {
        self.network_timeout_ms = ms;
        self
    }
}
