//! In-memory stand-in for the distributed knowledge store.

use async_trait::async_trait;
use cascade_application::ports::network::{NetworkClient, NetworkError};
use cascade_domain::{KnowledgeEntry, Query, QueryDigest};
use std::collections::HashMap;
use std::sync::RwLock;

/// Content-addressed map mimicking the network-wide knowledge store
///
/// Keys are query digests, exactly as the real distributed store would be
/// addressed. `fetch` is a pure lookup — idempotent and side-effect free,
/// as the port requires.
#[derive(Default)]
pub struct InMemoryNetworkStore {
    entries: RwLock<HashMap<QueryDigest, KnowledgeEntry>>,
}

impl InMemoryNetworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an entry under the digest of the given query text
    pub fn publish(&self, query_text: &str, entry: KnowledgeEntry) {
        let digest = QueryDigest::of(&Query::new(query_text));
        let mut entries = self.entries.write().expect("network store lock poisoned");
        entries.insert(digest, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("network store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl NetworkClient for InMemoryNetworkStore {
    async fn fetch(
        &self,
        digest: &QueryDigest,
    ) -> Result<Option<KnowledgeEntry>, NetworkError> {
        let entries = self.entries.read().expect("network store lock poisoned");
        Ok(entries.get(digest).cloned())
    }
}
