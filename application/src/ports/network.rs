//! Network tier client port
//!
//! A single async call abstracting the distributed, content-addressed
//! knowledge store. The wire protocol is out of scope; the contract is
//! only that `fetch` is idempotent and side-effect-free.

use async_trait::async_trait;
use cascade_domain::{KnowledgeEntry, QueryDigest};
use thiserror::Error;

/// Errors a network fetch can report
///
/// The network tier is the explicit last resort: both variants degrade to
/// a zero-confidence solution and never propagate to the caller.
#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Network unreachable: {0}")]
    Unreachable(String),

    #[error("Network request timed out")]
    Timeout,
}

/// Client for the distributed knowledge store
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Fetch the entry addressed by a query digest, if any
    async fn fetch(&self, digest: &QueryDigest)
        -> Result<Option<KnowledgeEntry>, NetworkError>;
}
