//! In-process peer adapter.

use async_trait::async_trait;
use cascade_application::ports::peer::{PeerAgent, PeerError};
use cascade_application::Agent;
use cascade_domain::{Domain, Query, Solution};
use std::sync::Arc;

/// Peer handle over an agent living in the same process
///
/// Delegates to [`Agent::respond_shallow`], so a collaborating agent only
/// ever reaches this peer's local, history, and domain-library tiers —
/// the peer's own peer and network tiers are structurally out of reach.
pub struct LocalPeer {
    agent: Arc<Agent>,
}

impl LocalPeer {
    pub fn new(agent: Arc<Agent>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl PeerAgent for LocalPeer {
    fn domain(&self) -> Domain {
        self.agent.domain()
    }

    async fn respond(&self, query: &Query) -> Result<Solution, PeerError> {
        Ok(self.agent.respond_shallow(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::static_directory::StaticPeerDirectory;
    use crate::library::in_memory::InMemoryDomainLibrary;
    use crate::network::in_memory::InMemoryNetworkStore;
    use cascade_application::ResolverConfig;
    use cascade_domain::KnowledgeEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPeer {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PeerAgent for CountingPeer {
        fn domain(&self) -> Domain {
            Domain::Operations
        }

        async fn respond(&self, _query: &Query) -> Result<Solution, PeerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Solution::none(cascade_domain::Tier::Local))
        }
    }

    fn agent_with_peers(calls: Arc<AtomicUsize>) -> Arc<Agent> {
        let library = Arc::new(InMemoryDomainLibrary::new());
        library.insert(
            Domain::Security,
            KnowledgeEntry::new("keys", "rotate the signing keys quarterly", 0.9),
        );
        // The wrapped agent has its own peers and network store configured.
        let directory = StaticPeerDirectory::new().register(Arc::new(CountingPeer { calls }));
        Arc::new(Agent::new(
            Domain::Security,
            ResolverConfig::default(),
            library,
            Arc::new(directory),
            Arc::new(InMemoryNetworkStore::new()),
        ))
    }

    #[tokio::test]
    async fn test_respond_answers_from_shallow_tiers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let peer = LocalPeer::new(agent_with_peers(Arc::clone(&calls)));

        let solution = peer
            .respond(&Query::new("when do we rotate the signing keys"))
            .await
            .unwrap();

        assert!(solution.confidence > 0.0);
        assert!(solution.recommendation.contains("rotate"));
    }

    #[tokio::test]
    async fn test_collaboration_stays_one_hop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let peer = LocalPeer::new(agent_with_peers(Arc::clone(&calls)));

        // Ask something the wrapped agent cannot answer shallowly; even so,
        // it must not fan out to its own peers.
        let solution = peer.respond(&Query::new("completely unrelated")).await.unwrap();

        assert_eq!(solution.confidence, 0.0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
