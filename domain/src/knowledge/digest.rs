//! Content-addressed query digests for the network tier.

use crate::core::query::Query;
use crate::memory::matching::tokenize;
use serde::{Deserialize, Serialize};

/// blake3 digest addressing a query in the distributed knowledge store
///
/// The digest is computed over the query's normalized token stream rather
/// than its raw bytes, so trivial whitespace and case variants of the same
/// question address the same network knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryDigest([u8; 32]);

impl QueryDigest {
    /// Compute the digest for a query
    pub fn of(query: &Query) -> Self {
        let tokens = tokenize(query.description());
        let mut hasher = blake3::Hasher::new();
        for token in &tokens {
            hasher.update(token.as_bytes());
            hasher.update(b" ");
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering (the form used in logs and reasoning trails)
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl std::fmt::Display for QueryDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable() {
        let a = QueryDigest::of(&Query::new("how to shard the index"));
        let b = QueryDigest::of(&Query::new("how to shard the index"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_normalizes_case_and_whitespace() {
        let a = QueryDigest::of(&Query::new("How  to SHARD the index?"));
        let b = QueryDigest::of(&Query::new("how to shard the index"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_queries_differ() {
        let a = QueryDigest::of(&Query::new("how to shard the index"));
        let b = QueryDigest::of(&Query::new("how to replicate the log"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_hex_rendering() {
        let d = QueryDigest::of(&Query::new("x"));
        let hex = d.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
