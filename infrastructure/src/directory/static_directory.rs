//! Static, registration-ordered peer directory.

use cascade_application::ports::peer::{PeerAgent, PeerDirectory};
use cascade_domain::Domain;
use std::sync::Arc;

/// Read-only peer directory built once at wiring time
///
/// Registration order is preserved and is what makes peer selection
/// deterministic. Peers joining or leaving means building a new directory;
/// nothing is synchronized mid-resolve.
#[derive(Default)]
pub struct StaticPeerDirectory {
    peers: Vec<Arc<dyn PeerAgent>>,
}

impl StaticPeerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer (builder style, wiring time only)
    pub fn register(mut self, peer: Arc<dyn PeerAgent>) -> Self {
        self.peers.push(peer);
        self
    }

    /// Total number of registered peers across all domains
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

impl PeerDirectory for StaticPeerDirectory {
    fn peers_for(&self, domain: Domain) -> Vec<Arc<dyn PeerAgent>> {
        self.peers
            .iter()
            .filter(|p| p.domain() == domain)
            .cloned()
            .collect()
    }
}
