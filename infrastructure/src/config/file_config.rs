//! On-disk configuration schema.

use cascade_application::ResolverConfig;
use serde::{Deserialize, Serialize};

/// Root of `cascade.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// `[resolver]` section
    #[serde(default)]
    pub resolver: ResolverSection,
}

/// `[resolver]` — per-agent escalation parameters
///
/// Every field falls back to the built-in default, so a partial file only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSection {
    pub confidence_threshold: f64,
    pub local_context_capacity: usize,
    pub history_capacity: usize,
    pub peer_fanout_limit: usize,
    pub total_budget_ms: u64,
    pub peer_timeout_ms: u64,
    pub network_timeout_ms: u64,
}

impl Default for ResolverSection {
    fn default() -> Self {
        let defaults = ResolverConfig::default();
        Self {
            confidence_threshold: defaults.confidence_threshold,
            local_context_capacity: defaults.local_context_capacity,
            history_capacity: defaults.history_capacity,
            peer_fanout_limit: defaults.peer_fanout_limit,
            total_budget_ms: defaults.total_budget_ms,
            peer_timeout_ms: defaults.peer_timeout_ms,
            network_timeout_ms: defaults.network_timeout_ms,
        }
    }
}

impl ResolverSection {
    /// Convert into the application-layer config
    pub fn to_resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            confidence_threshold: self.confidence_threshold,
            local_context_capacity: self.local_context_capacity,
            history_capacity: self.history_capacity,
            peer_fanout_limit: self.peer_fanout_limit,
            total_budget_ms: self.total_budget_ms,
            peer_timeout_ms: self.peer_timeout_ms,
            network_timeout_ms: self.network_timeout_ms,
        }
    }
}
