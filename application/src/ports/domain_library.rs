//! Domain library port
//!
//! Read-only lookup into the shared, domain-scoped knowledge base. The
//! indexing technique behind the lookup (keyword, tag, vector) is opaque to
//! the resolver; adapters return the best-matching entry or `None`.

use cascade_domain::{Domain, KnowledgeEntry, Query};
use thiserror::Error;

/// Errors a domain library adapter can report
///
/// An unavailable library is caught at the tier boundary and degraded to a
/// zero-confidence solution; it never reaches the resolver's caller.
#[derive(Error, Debug, Clone)]
pub enum LibraryError {
    #[error("Library unavailable: {0}")]
    Unavailable(String),
}

/// Read-only lookup the domain library tier consumes
///
/// Lookups are synchronous by contract: the library is a cheap, local
/// store (target latency ≤ 50 ms) and must not suspend.
pub trait DomainLibrary: Send + Sync {
    /// Find the best entry for the query within a domain
    fn lookup(
        &self,
        domain: Domain,
        query: &Query,
    ) -> Result<Option<KnowledgeEntry>, LibraryError>;
}
