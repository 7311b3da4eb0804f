//! Peer collaboration ports
//!
//! The collaboration tier consumes two contracts: a read-only directory
//! mapping domains to reachable peers, and the peer handle itself. A peer
//! answers from its own local/history/domain-library tiers only — one hop,
//! never a recursive escalation — which bounds the fan-out graph.

use async_trait::async_trait;
use cascade_domain::{Domain, Query, Solution};
use std::sync::Arc;
use thiserror::Error;

/// Errors a peer request can report
///
/// Failed peers are excluded from fusion, not surfaced as errors.
#[derive(Error, Debug, Clone)]
pub enum PeerError {
    #[error("Peer unreachable: {0}")]
    Unreachable(String),

    #[error("Peer timed out")]
    Timeout,
}

/// Handle to a reachable agent in another domain
#[async_trait]
pub trait PeerAgent: Send + Sync {
    /// The domain this peer serves
    fn domain(&self) -> Domain;

    /// Answer from the peer's shallow tiers (local, history, domain library)
    ///
    /// Implementations must not escalate to their own peer or network
    /// tiers; that invariant is what keeps collaboration one hop deep.
    async fn respond(&self, query: &Query) -> Result<Solution, PeerError>;
}

/// Read-only lookup of which peers serve which domain
///
/// Injected per resolve as a snapshot reference; peers joining or leaving
/// is an administrative concern, never synchronized mid-resolve.
pub trait PeerDirectory: Send + Sync {
    /// All reachable peers for a domain
    fn peers_for(&self, domain: Domain) -> Vec<Arc<dyn PeerAgent>>;
}
