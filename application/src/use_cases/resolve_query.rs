//! Resolve query use case — the escalation engine.
//!
//! Walks the tiers in fixed order (`Local → History → DomainLibrary →
//! Peer → Network`), short-circuiting as soon as a solution clears the
//! agent's confidence threshold and stopping with the best solution so far
//! once the wall-clock budget runs out. The network tier is terminal:
//! there is nowhere left to escalate, so its result ends the walk without
//! a threshold check.
//!
//! Peer fan-out is concurrent: every selected peer is spawned on a
//! `JoinSet` and awaited under its own independent timeout, so one slow
//! peer cannot stall the others. Failed or timed-out peers are excluded
//! from fusion, not treated as errors.

use crate::agent::Agent;
use crate::ports::observer::EscalationObserver;
use crate::ports::peer::PeerAgent;
use cascade_domain::{confidence, Domain, DomainError, Query, QueryDigest, Solution, Tier};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Errors that can cross the resolver boundary
///
/// Everything below the agent boundary is recovered locally; the caller
/// sees either a solution or this.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl From<DomainError> for ResolveError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidQuery(msg) => ResolveError::InvalidQuery(msg),
        }
    }
}

/// Caller options for a single resolve
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Caller-supplied deadline; lowers (never raises) the agent's budget
    pub deadline: Option<Duration>,
}

impl ResolveOptions {
    /// Restrict the resolve to the given deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn effective_budget(&self, configured: Duration) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.min(configured),
            None => configured,
        }
    }
}

/// One escalation walk over an agent's tiers
pub(crate) struct EscalationEngine<'a> {
    agent: &'a Agent,
    observer: &'a dyn EscalationObserver,
}

impl<'a> EscalationEngine<'a> {
    pub(crate) fn new(agent: &'a Agent, observer: &'a dyn EscalationObserver) -> Self {
        Self { agent, observer }
    }

    /// Run the walk and record the outcome in agent memory
    pub(crate) async fn run(
        &self,
        query: &Query,
        options: &ResolveOptions,
    ) -> Result<Solution, ResolveError> {
        query.validate()?;

        let threshold = self.agent.config().confidence_threshold;
        let budget = options.effective_budget(self.agent.config().total_budget());
        let started = Instant::now();
        let snapshot = self.agent.memory_snapshot();

        info!(
            domain = %self.agent.domain(),
            query = %query,
            budget_ms = budget.as_millis() as u64,
            "starting escalation"
        );

        let mut best = Solution::none(Tier::Local);

        // Synchronous tiers. Local always runs — it is in-memory and cheap —
        // so even a zero deadline degrades to local knowledge, never to an
        // error. The budget gates each advance after that.
        for tier in [Tier::Local, Tier::History, Tier::DomainLibrary] {
            if tier != Tier::Local && started.elapsed() >= budget {
                return Ok(self.finish_exhausted(query, best, tier));
            }
            self.observer.on_tier_start(tier);
            let solution = match tier {
                Tier::Local => self.agent.match_local(&snapshot, query),
                Tier::History => self.agent.match_history(&snapshot, query),
                _ => self.agent.match_library(query),
            };
            self.observer.on_tier_complete(tier, &solution);
            debug!(tier = %tier, confidence = solution.confidence, "tier consulted");

            if solution.confidence > best.confidence {
                best = solution.clone();
            }
            if solution.meets(threshold) {
                return Ok(self.finish_short_circuit(query, solution));
            }
        }

        // Collaboration tier.
        let remaining = budget.saturating_sub(started.elapsed());
        if remaining.is_zero() {
            return Ok(self.finish_exhausted(query, best, Tier::Peer));
        }
        self.observer.on_tier_start(Tier::Peer);
        let solution = self.query_peers(query, remaining).await;
        self.observer.on_tier_complete(Tier::Peer, &solution);
        if solution.confidence > best.confidence {
            best = solution.clone();
        }
        if solution.meets(threshold) {
            return Ok(self.finish_short_circuit(query, solution));
        }

        // Network tier — terminal, no threshold check afterwards.
        let remaining = budget.saturating_sub(started.elapsed());
        if remaining.is_zero() {
            return Ok(self.finish_exhausted(query, best, Tier::Network));
        }
        self.observer.on_tier_start(Tier::Network);
        let solution = self.query_network(query, remaining).await;
        self.observer.on_tier_complete(Tier::Network, &solution);

        // Best-effort terminal decision: the network answer wins unless an
        // earlier tier was strictly more confident. Ties go to the network
        // so a nothing-anywhere walk reports the terminal tier.
        let outcome = if solution.confidence >= best.confidence {
            solution
        } else {
            best
        };
        Ok(self.finish(query, outcome))
    }

    // ==================== Collaboration tier ====================

    /// Concurrent one-hop fan-out to peers in other domains
    async fn query_peers(&self, query: &Query, remaining: Duration) -> Solution {
        let peers = self.select_peers(query);
        if peers.is_empty() {
            return Solution::none(Tier::Peer);
        }

        let per_peer_timeout = self.agent.config().peer_timeout().min(remaining);
        let mut join_set = JoinSet::new();
        for peer in peers {
            let query = query.clone();
            join_set.spawn(async move {
                let domain = peer.domain();
                let outcome =
                    tokio::time::timeout(per_peer_timeout, peer.respond(&query)).await;
                (domain, outcome)
            });
        }

        let mut responses: Vec<(Domain, Solution)> = Vec::new();
        let mut notes: Vec<String> = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((domain, Ok(Ok(solution)))) => {
                    debug!(peer = %domain, confidence = solution.confidence, "peer responded");
                    responses.push((domain, solution));
                }
                Ok((domain, Ok(Err(e)))) => {
                    warn!(peer = %domain, error = %e, "peer excluded from fusion");
                    notes.push(format!("peer {} unavailable: {}", domain, e));
                }
                Ok((domain, Err(_))) => {
                    warn!(peer = %domain, "peer timed out, excluded from fusion");
                    notes.push(format!("peer {} timed out", domain));
                }
                Err(e) => {
                    warn!(error = %e, "peer task join error");
                }
            }
        }

        self.fuse_peer_responses(responses, notes)
    }

    /// Candidate peers: hinted domains first, then the fixed domain order,
    /// own domain excluded, truncated to the fan-out limit
    fn select_peers(&self, query: &Query) -> Vec<Arc<dyn PeerAgent>> {
        let own = self.agent.domain();
        let mut ordered: Vec<Domain> = Vec::new();
        for domain in query.hints().iter().copied().chain(Domain::ALL) {
            if domain != own && !ordered.contains(&domain) {
                ordered.push(domain);
            }
        }

        let mut peers: Vec<Arc<dyn PeerAgent>> = Vec::new();
        for domain in ordered {
            for peer in self.agent.directory().peers_for(domain) {
                if peers.len() == self.agent.config().peer_fanout_limit {
                    return peers;
                }
                peers.push(peer);
            }
        }
        peers
    }

    /// Fuse responses: max-confidence constituent plus a corroboration
    /// bonus, provenance concatenated across all responders
    fn fuse_peer_responses(
        &self,
        responses: Vec<(Domain, Solution)>,
        notes: Vec<String>,
    ) -> Solution {
        let responders: Vec<&(Domain, Solution)> = responses
            .iter()
            .filter(|(_, s)| s.confidence > 0.0)
            .collect();

        let Some(best) = responders
            .iter()
            .max_by(|(_, a), (_, b)| a.confidence.total_cmp(&b.confidence))
        else {
            let mut solution = Solution::none(Tier::Peer);
            solution.reasoning.extend(notes);
            return solution;
        };

        let confidences: Vec<f64> = responders.iter().map(|(_, s)| s.confidence).collect();
        let composite = confidence::fuse(&confidences);

        let mut reasoning = Vec::new();
        for (domain, solution) in &responders {
            reasoning.push(format!(
                "peer {} answered (confidence {:.2})",
                domain, solution.confidence
            ));
            reasoning.extend(solution.reasoning.iter().cloned());
        }
        reasoning.extend(notes);
        if responders.len() > 1 {
            reasoning.push(format!(
                "{} corroborating peers raised composite confidence to {:.2}",
                responders.len(),
                composite
            ));
        }

        Solution::found(Tier::Peer, best.1.recommendation.clone(), composite, reasoning)
    }

    // ==================== Network tier ====================

    /// Single content-addressed fetch; degrades silently on any failure
    async fn query_network(&self, query: &Query, remaining: Duration) -> Solution {
        let digest = QueryDigest::of(query);
        let timeout = self.agent.config().network_timeout().min(remaining);
        match tokio::time::timeout(timeout, self.agent.network().fetch(&digest)).await {
            Ok(Ok(Some(entry))) => Solution::found(
                Tier::Network,
                entry.description.clone(),
                confidence::score(entry.strength, Tier::Network),
                vec![format!(
                    "network store hit '{}' (digest {}, strength {:.2})",
                    entry.name,
                    &digest.to_hex()[..12],
                    entry.strength
                )],
            ),
            Ok(Ok(None)) => Solution::none(Tier::Network),
            Ok(Err(e)) => {
                warn!(error = %e, "network tier degraded");
                Solution::unavailable(Tier::Network, e.to_string())
            }
            Err(_) => {
                warn!("network tier timed out");
                Solution::unavailable(Tier::Network, "timeout")
            }
        }
    }

    // ==================== Completion ====================

    fn finish_short_circuit(&self, query: &Query, solution: Solution) -> Solution {
        self.observer
            .on_short_circuit(solution.tier, solution.confidence);
        info!(
            tier = %solution.tier,
            confidence = solution.confidence,
            "threshold met, short-circuiting"
        );
        self.finish(query, solution)
    }

    fn finish_exhausted(&self, query: &Query, best: Solution, next_tier: Tier) -> Solution {
        self.observer.on_budget_exhausted(next_tier);
        info!(
            stopped_before = %next_tier,
            confidence = best.confidence,
            "budget exhausted, returning best so far"
        );
        self.finish(query, best)
    }

    fn finish(&self, query: &Query, solution: Solution) -> Solution {
        self.agent.record(query.clone(), solution.clone());
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolver_config::ResolverConfig;
    use crate::ports::domain_library::{DomainLibrary, LibraryError};
    use crate::ports::network::{NetworkClient, NetworkError};
    use crate::ports::observer::{EscalationObserver, NoObserver};
    use crate::ports::peer::{PeerAgent, PeerDirectory, PeerError};
    use async_trait::async_trait;
    use cascade_domain::KnowledgeEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ==================== Test doubles ====================

    struct EmptyLibrary;

    impl DomainLibrary for EmptyLibrary {
        fn lookup(
            &self,
            _domain: Domain,
            _query: &Query,
        ) -> Result<Option<KnowledgeEntry>, LibraryError> {
            Ok(None)
        }
    }

    struct FixedLibrary {
        entry: KnowledgeEntry,
    }

    impl DomainLibrary for FixedLibrary {
        fn lookup(
            &self,
            _domain: Domain,
            _query: &Query,
        ) -> Result<Option<KnowledgeEntry>, LibraryError> {
            Ok(Some(self.entry.clone()))
        }
    }

    struct DownLibrary;

    impl DomainLibrary for DownLibrary {
        fn lookup(
            &self,
            _domain: Domain,
            _query: &Query,
        ) -> Result<Option<KnowledgeEntry>, LibraryError> {
            Err(LibraryError::Unavailable("store offline".to_string()))
        }
    }

    struct StubPeer {
        domain: Domain,
        confidence: f64,
        delay: Duration,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PeerAgent for StubPeer {
        fn domain(&self) -> Domain {
            self.domain
        }

        async fn respond(&self, _query: &Query) -> Result<Solution, PeerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.confidence > 0.0 {
                Ok(Solution::found(
                    Tier::DomainLibrary,
                    format!("{} peer answer", self.domain),
                    self.confidence,
                    vec![format!("{} peer reasoning", self.domain)],
                ))
            } else {
                Ok(Solution::none(Tier::DomainLibrary))
            }
        }
    }

    #[derive(Default)]
    struct StubDirectory {
        peers: Vec<Arc<dyn PeerAgent>>,
    }

    impl PeerDirectory for StubDirectory {
        fn peers_for(&self, domain: Domain) -> Vec<Arc<dyn PeerAgent>> {
            self.peers
                .iter()
                .filter(|p| p.domain() == domain)
                .cloned()
                .collect()
        }
    }

    struct CountingNetwork {
        entry: Option<KnowledgeEntry>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl NetworkClient for CountingNetwork {
        async fn fetch(
            &self,
            _digest: &QueryDigest,
        ) -> Result<Option<KnowledgeEntry>, NetworkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.entry.clone())
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        started: Mutex<Vec<Tier>>,
        completed: Mutex<Vec<(Tier, f64)>>,
    }

    impl EscalationObserver for RecordingObserver {
        fn on_tier_start(&self, tier: Tier) {
            self.started.lock().unwrap().push(tier);
        }

        fn on_tier_complete(&self, tier: Tier, solution: &Solution) {
            self.completed
                .lock()
                .unwrap()
                .push((tier, solution.confidence));
        }
    }

    fn agent_with(
        library: Arc<dyn DomainLibrary>,
        directory: Arc<dyn PeerDirectory>,
        network: Arc<dyn NetworkClient>,
    ) -> Agent {
        Agent::new(
            Domain::Scalability,
            ResolverConfig::default(),
            library,
            directory,
            network,
        )
    }

    fn empty_agent() -> (Agent, Arc<AtomicUsize>) {
        let network_calls = Arc::new(AtomicUsize::new(0));
        let agent = agent_with(
            Arc::new(EmptyLibrary),
            Arc::new(StubDirectory::default()),
            Arc::new(CountingNetwork {
                entry: None,
                calls: Arc::clone(&network_calls),
            }),
        );
        (agent, network_calls)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_invalid_query_is_rejected_before_escalation() {
        let (agent, network_calls) = empty_agent();
        let result = agent.resolve(&Query::new("   ")).await;
        assert!(matches!(result, Err(ResolveError::InvalidQuery(_))));
        assert_eq!(network_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_match_anywhere_terminates_at_network_with_zero_confidence() {
        let (agent, network_calls) = empty_agent();
        let observer = RecordingObserver::default();

        let solution = agent
            .resolve_with(
                &Query::new("completely novel question"),
                &ResolveOptions::default(),
                &observer,
            )
            .await
            .unwrap();

        assert_eq!(solution.tier, Tier::Network);
        assert_eq!(solution.confidence, 0.0);
        assert_eq!(network_calls.load(Ordering::SeqCst), 1);
        // All five tiers were walked, in order.
        assert_eq!(
            *observer.started.lock().unwrap(),
            Tier::ESCALATION_ORDER.to_vec()
        );
    }

    #[tokio::test]
    async fn test_local_short_circuit_makes_no_peer_or_network_calls() {
        let peer_calls = Arc::new(AtomicUsize::new(0));
        let network_calls = Arc::new(AtomicUsize::new(0));
        let directory = StubDirectory {
            peers: vec![Arc::new(StubPeer {
                domain: Domain::Quality,
                confidence: 0.9,
                delay: Duration::ZERO,
                calls: Arc::clone(&peer_calls),
            })],
        };
        let agent = agent_with(
            Arc::new(FixedLibrary {
                entry: KnowledgeEntry::new(
                    "sharding",
                    "use consistent hashing to shard the index",
                    1.0,
                ),
            }),
            Arc::new(directory),
            Arc::new(CountingNetwork {
                entry: None,
                calls: Arc::clone(&network_calls),
            }),
        );

        // First resolve lands on the curated library (strength 1.0 -> 0.95)
        // and is recorded into the local context window.
        let query = Query::new("how do we shard the index");
        let first = agent.resolve(&query).await.unwrap();
        assert_eq!(first.tier, Tier::DomainLibrary);

        // Asking again matches the recent exchange and stops at Local.
        let second = agent.resolve(&query).await.unwrap();
        assert_eq!(second.tier, Tier::Local);
        assert!(second.meets(0.85));
        assert_eq!(peer_calls.load(Ordering::SeqCst), 0);
        assert_eq!(network_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sub_threshold_library_escalates_and_peers_corroborate() {
        let peer_calls = Arc::new(AtomicUsize::new(0));
        let directory = StubDirectory {
            peers: vec![
                Arc::new(StubPeer {
                    domain: Domain::Quality,
                    confidence: 0.82,
                    delay: Duration::ZERO,
                    calls: Arc::clone(&peer_calls),
                }),
                Arc::new(StubPeer {
                    domain: Domain::Operations,
                    confidence: 0.80,
                    delay: Duration::ZERO,
                    calls: Arc::clone(&peer_calls),
                }),
            ],
        };
        // strength 0.6 -> 0.50 + 0.45 * 0.6 = 0.77, below the 0.85 bar
        let agent = agent_with(
            Arc::new(FixedLibrary {
                entry: KnowledgeEntry::new("caching", "cache at the edge", 0.6),
            }),
            Arc::new(directory),
            Arc::new(CountingNetwork {
                entry: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }),
        );

        let solution = agent.resolve(&Query::new("novel scaling question")).await.unwrap();

        assert_eq!(solution.tier, Tier::Peer);
        assert_eq!(peer_calls.load(Ordering::SeqCst), 2);
        // Composite exceeds each constituent and clears the bar.
        assert!(solution.confidence > 0.82);
        assert!(solution.meets(0.85));
        // Both peers' reasoning trails are in the provenance.
        let trail = solution.reasoning.join("\n");
        assert!(trail.contains("quality peer reasoning"));
        assert!(trail.contains("operations peer reasoning"));
    }

    #[tokio::test]
    async fn test_resolution_is_deterministic_for_identical_state() {
        let build = || {
            agent_with(
                Arc::new(FixedLibrary {
                    entry: KnowledgeEntry::new("caching", "cache at the edge", 0.6),
                }),
                Arc::new(StubDirectory::default()),
                Arc::new(CountingNetwork {
                    entry: None,
                    calls: Arc::new(AtomicUsize::new(0)),
                }),
            )
        };
        let query = Query::new("how should we cache");

        let a = build().resolve(&query).await.unwrap();
        let b = build().resolve(&query).await.unwrap();

        assert_eq!(a.tier, b.tier);
        assert!((a.confidence - b.confidence).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_zero_deadline_degrades_to_local_result() {
        let peer_calls = Arc::new(AtomicUsize::new(0));
        let network_calls = Arc::new(AtomicUsize::new(0));
        let directory = StubDirectory {
            peers: vec![Arc::new(StubPeer {
                domain: Domain::Quality,
                confidence: 0.9,
                delay: Duration::ZERO,
                calls: Arc::clone(&peer_calls),
            })],
        };
        let agent = agent_with(
            Arc::new(EmptyLibrary),
            Arc::new(directory),
            Arc::new(CountingNetwork {
                entry: None,
                calls: Arc::clone(&network_calls),
            }),
        );

        let solution = agent
            .resolve_with(
                &Query::new("anything at all"),
                &ResolveOptions::default().with_deadline(Duration::ZERO),
                &NoObserver,
            )
            .await
            .unwrap();

        // Local still ran; nothing suspending was attempted.
        assert_eq!(solution.tier, Tier::Local);
        assert_eq!(solution.confidence, 0.0);
        assert_eq!(peer_calls.load(Ordering::SeqCst), 0);
        assert_eq!(network_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_peer_does_not_stall_the_fanout() {
        let calls = Arc::new(AtomicUsize::new(0));
        let directory = StubDirectory {
            peers: vec![
                Arc::new(StubPeer {
                    domain: Domain::Quality,
                    confidence: 0.6,
                    delay: Duration::from_millis(10),
                    calls: Arc::clone(&calls),
                }),
                Arc::new(StubPeer {
                    domain: Domain::Operations,
                    confidence: 0.5,
                    delay: Duration::from_millis(20),
                    calls: Arc::clone(&calls),
                }),
                Arc::new(StubPeer {
                    domain: Domain::Security,
                    confidence: 0.9,
                    delay: Duration::from_secs(10),
                    calls: Arc::clone(&calls),
                }),
            ],
        };
        let agent = agent_with(
            Arc::new(EmptyLibrary),
            Arc::new(directory),
            Arc::new(CountingNetwork {
                entry: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }),
        );
        let observer = RecordingObserver::default();

        let started = Instant::now();
        let solution = agent
            .resolve_with(
                &Query::new("cross domain question"),
                &ResolveOptions::default(),
                &observer,
            )
            .await
            .unwrap();
        let elapsed = started.elapsed();

        // Bounded by the per-peer timeout (100 ms), not the 10 s straggler
        // and not the sum of all peer latencies.
        assert!(elapsed < Duration::from_millis(200), "elapsed {:?}", elapsed);

        // The straggler was excluded from fusion: composite comes from the
        // two responders (0.6 max + 0.05 corroboration).
        let peer_confidence = observer
            .completed
            .lock()
            .unwrap()
            .iter()
            .find(|(tier, _)| *tier == Tier::Peer)
            .map(|(_, c)| *c)
            .unwrap();
        assert!((peer_confidence - 0.65).abs() < 1e-9);
        let trail = solution.reasoning.join("\n");
        assert!(!trail.contains("security peer reasoning"));
    }

    #[tokio::test]
    async fn test_unavailable_library_degrades_and_escalation_continues() {
        let network_calls = Arc::new(AtomicUsize::new(0));
        let agent = agent_with(
            Arc::new(DownLibrary),
            Arc::new(StubDirectory::default()),
            Arc::new(CountingNetwork {
                entry: Some(KnowledgeEntry::new(
                    "shared-pattern",
                    "a network-shared answer",
                    1.0,
                )),
                calls: Arc::clone(&network_calls),
            }),
        );

        let solution = agent.resolve(&Query::new("who knows this")).await.unwrap();

        // The walk made it past the broken library to the network store,
        // whose confidence stays under the unverified-source cap.
        assert_eq!(solution.tier, Tier::Network);
        assert!(solution.confidence <= 0.85);
        assert!(solution.confidence > 0.0);
        assert_eq!(network_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fanout_respects_the_configured_limit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let peers: Vec<Arc<dyn PeerAgent>> = [
            Domain::Infrastructure,
            Domain::Knowledge,
            Domain::Quality,
            Domain::Security,
            Domain::Operations,
        ]
        .into_iter()
        .map(|domain| {
            Arc::new(StubPeer {
                domain,
                confidence: 0.4,
                delay: Duration::ZERO,
                calls: Arc::clone(&calls),
            }) as Arc<dyn PeerAgent>
        })
        .collect();
        let agent = agent_with(
            Arc::new(EmptyLibrary),
            Arc::new(StubDirectory { peers }),
            Arc::new(CountingNetwork {
                entry: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }),
        );

        agent.resolve(&Query::new("spread this wide")).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_hinted_domains_are_queried_first() {
        let hinted_calls = Arc::new(AtomicUsize::new(0));
        let other_calls = Arc::new(AtomicUsize::new(0));
        let peers: Vec<Arc<dyn PeerAgent>> = vec![
            Arc::new(StubPeer {
                domain: Domain::Infrastructure,
                confidence: 0.4,
                delay: Duration::ZERO,
                calls: Arc::clone(&other_calls),
            }),
            Arc::new(StubPeer {
                domain: Domain::Knowledge,
                confidence: 0.4,
                delay: Duration::ZERO,
                calls: Arc::clone(&other_calls),
            }),
            Arc::new(StubPeer {
                domain: Domain::Quality,
                confidence: 0.4,
                delay: Duration::ZERO,
                calls: Arc::clone(&other_calls),
            }),
            Arc::new(StubPeer {
                domain: Domain::Operations,
                confidence: 0.4,
                delay: Duration::ZERO,
                calls: Arc::clone(&hinted_calls),
            }),
        ];
        let agent = agent_with(
            Arc::new(EmptyLibrary),
            Arc::new(StubDirectory { peers }),
            Arc::new(CountingNetwork {
                entry: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }),
        );

        let query = Query::new("ops question").with_hint(Domain::Operations);
        agent.resolve(&query).await.unwrap();

        // The hinted domain made the three-slot cut ahead of later domains.
        assert_eq!(hinted_calls.load(Ordering::SeqCst), 1);
        assert_eq!(other_calls.load(Ordering::SeqCst), 2);
    }
}
