//! In-memory domain library.

use cascade_application::ports::domain_library::{DomainLibrary, LibraryError};
use cascade_domain::memory::matching;
use cascade_domain::{Domain, KnowledgeEntry, Query};
use std::collections::HashMap;
use std::sync::RwLock;

/// Shared, read-mostly knowledge base keyed by domain
///
/// Mutation ([`InMemoryDomainLibrary::insert`]) is an administrative
/// operation outside the resolve path; agents hold the library behind an
/// `Arc` and only ever call [`DomainLibrary::lookup`].
#[derive(Default)]
pub struct InMemoryDomainLibrary {
    entries: RwLock<HashMap<Domain, Vec<KnowledgeEntry>>>,
}

impl InMemoryDomainLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to a domain's shelf (administrative path)
    pub fn insert(&self, domain: Domain, entry: KnowledgeEntry) {
        let mut entries = self.entries.write().expect("library lock poisoned");
        entries.entry(domain).or_default().push(entry);
    }

    /// Number of entries held for a domain
    pub fn len(&self, domain: Domain) -> usize {
        let entries = self.entries.read().expect("library lock poisoned");
        entries.get(&domain).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, domain: Domain) -> bool {
        self.len(domain) == 0
    }

    /// The text a lookup matches against: description plus context snippets
    fn query_text(query: &Query) -> String {
        let mut text = query.description().to_string();
        for snippet in query.context() {
            text.push(' ');
            text.push_str(snippet);
        }
        text
    }
}

impl DomainLibrary for InMemoryDomainLibrary {
    fn lookup(
        &self,
        domain: Domain,
        query: &Query,
    ) -> Result<Option<KnowledgeEntry>, LibraryError> {
        let entries = self.entries.read().expect("library lock poisoned");
        let Some(shelf) = entries.get(&domain) else {
            return Ok(None);
        };

        let text = Self::query_text(query);
        let mut best: Option<(f64, &KnowledgeEntry)> = None;
        for entry in shelf {
            let score = matching::overlap(&text, &entry.description);
            if score <= 0.0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_score, best_entry)) => {
                    score > best_score
                        || (score == best_score && entry.strength > best_entry.strength)
                }
            };
            if better {
                best = Some((score, entry));
            }
        }
        Ok(best.map(|(_, entry)| entry.clone()))
    }
}
