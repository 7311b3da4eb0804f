//! Agent façade
//!
//! An [`Agent`] binds one responsibility domain to its knowledge sources
//! and exposes the single public operation [`Agent::resolve`]. The agent's
//! mutable state (context window + history) is owned here and touched only
//! by the escalation engine: reads take an immutable snapshot, the
//! post-resolve append is a short write-locked critical section.

use crate::config::resolver_config::ResolverConfig;
use crate::ports::domain_library::DomainLibrary;
use crate::ports::network::NetworkClient;
use crate::ports::observer::{EscalationObserver, NoObserver};
use crate::ports::peer::PeerDirectory;
use crate::use_cases::resolve_query::{EscalationEngine, ResolveError, ResolveOptions};
use cascade_domain::memory::matching;
use cascade_domain::{
    confidence, ContextWindow, Domain, Exchange, HistoryLog, Query, Solution, Tier,
};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Immutable snapshot of an agent's memory at the moment a resolve starts
///
/// Concurrent resolves against the same agent each walk their own snapshot;
/// mid-resolve appends by other queries are never observed.
#[derive(Debug, Clone)]
pub(crate) struct MemorySnapshot {
    pub window: ContextWindow,
    pub history: HistoryLog,
}

struct AgentMemory {
    window: ContextWindow,
    history: HistoryLog,
}

/// A domain-specialized decision-making unit
pub struct Agent {
    domain: Domain,
    config: ResolverConfig,
    memory: RwLock<AgentMemory>,
    library: Arc<dyn DomainLibrary>,
    directory: Arc<dyn PeerDirectory>,
    network: Arc<dyn NetworkClient>,
}

impl Agent {
    /// Create an agent for a domain with empty memory
    pub fn new(
        domain: Domain,
        config: ResolverConfig,
        library: Arc<dyn DomainLibrary>,
        directory: Arc<dyn PeerDirectory>,
        network: Arc<dyn NetworkClient>,
    ) -> Self {
        let memory = AgentMemory {
            window: ContextWindow::new(config.local_context_capacity),
            history: HistoryLog::new(config.history_capacity),
        };
        Self {
            domain,
            config,
            memory: RwLock::new(memory),
            library,
            directory,
            network,
        }
    }

    /// The responsibility domain this agent owns
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The agent's escalation parameters
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a query through the full escalation walk
    ///
    /// The sole public entry point. Always returns a [`Solution`] (possibly
    /// low-confidence, tagged with its source tier); the only error is an
    /// invalid query, rejected before escalation begins.
    pub async fn resolve(&self, query: &Query) -> Result<Solution, ResolveError> {
        self.resolve_with(query, &ResolveOptions::default(), &NoObserver)
            .await
    }

    /// Resolve with caller options (deadline) and an observer
    pub async fn resolve_with(
        &self,
        query: &Query,
        options: &ResolveOptions,
        observer: &dyn EscalationObserver,
    ) -> Result<Solution, ResolveError> {
        EscalationEngine::new(self, observer).run(query, options).await
    }

    /// Answer from the shallow tiers only (local, history, domain library)
    ///
    /// This is the entry point peers call during collaboration fan-out. It
    /// never consults this agent's own peer or network tiers, which keeps
    /// cross-agent collaboration bounded to one hop.
    pub fn respond_shallow(&self, query: &Query) -> Solution {
        if query.validate().is_err() {
            return Solution::none(Tier::Local);
        }
        let snapshot = self.memory_snapshot();
        let mut best = Solution::none(Tier::Local);
        for tier in [Tier::Local, Tier::History, Tier::DomainLibrary] {
            let solution = match tier {
                Tier::Local => self.match_local(&snapshot, query),
                Tier::History => self.match_history(&snapshot, query),
                _ => self.match_library(query),
            };
            if solution.confidence > best.confidence {
                best = solution.clone();
            }
            if solution.meets(self.config.confidence_threshold) {
                return solution;
            }
        }
        best
    }

    // ==================== Engine-facing internals ====================

    pub(crate) fn directory(&self) -> &Arc<dyn PeerDirectory> {
        &self.directory
    }

    pub(crate) fn network(&self) -> &Arc<dyn NetworkClient> {
        &self.network
    }

    /// Clone the memory under a read lock
    pub(crate) fn memory_snapshot(&self) -> MemorySnapshot {
        let memory = self.memory.read().expect("agent memory lock poisoned");
        MemorySnapshot {
            window: memory.window.clone(),
            history: memory.history.clone(),
        }
    }

    /// Append a resolved exchange to the context window and history
    ///
    /// Short, non-suspending critical section; the only write the resolve
    /// path ever performs.
    pub(crate) fn record(&self, query: Query, solution: Solution) {
        let exchange = Exchange::new(query, solution);
        let mut memory = self.memory.write().expect("agent memory lock poisoned");
        memory.window.record(exchange.clone());
        memory.history.record(exchange);
    }

    /// Match against the recent activity window
    pub(crate) fn match_local(&self, snapshot: &MemorySnapshot, query: &Query) -> Solution {
        match matching::best_match(query, snapshot.window.iter_recent()) {
            Some(hit) => Solution::found(
                Tier::Local,
                hit.recommendation.clone(),
                confidence::score(hit.strength, Tier::Local),
                vec![format!(
                    "local context match: '{}' (overlap {:.2})",
                    hit.matched_description, hit.strength
                )],
            ),
            None => Solution::none(Tier::Local),
        }
    }

    /// Match against the full historical record
    pub(crate) fn match_history(&self, snapshot: &MemorySnapshot, query: &Query) -> Solution {
        match matching::best_match(query, snapshot.history.iter_recent()) {
            Some(hit) => Solution::found(
                Tier::History,
                hit.recommendation.clone(),
                confidence::score(hit.strength, Tier::History),
                vec![format!(
                    "history match: '{}' (overlap {:.2})",
                    hit.matched_description, hit.strength
                )],
            ),
            None => Solution::none(Tier::History),
        }
    }

    /// Match against the shared, curated domain library
    ///
    /// An unreachable library degrades to a zero-confidence solution so
    /// the escalation can continue.
    pub(crate) fn match_library(&self, query: &Query) -> Solution {
        match self.library.lookup(self.domain, query) {
            Ok(Some(entry)) => Solution::found(
                Tier::DomainLibrary,
                entry.description.clone(),
                confidence::score(entry.strength, Tier::DomainLibrary),
                vec![format!(
                    "domain library hit '{}' in {} (strength {:.2})",
                    entry.name, self.domain, entry.strength
                )],
            ),
            Ok(None) => Solution::none(Tier::DomainLibrary),
            Err(e) => {
                debug!(domain = %self.domain, error = %e, "domain library unavailable");
                Solution::unavailable(Tier::DomainLibrary, e.to_string())
            }
        }
    }
}
