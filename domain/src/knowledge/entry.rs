//! Knowledge entries

use serde::{Deserialize, Serialize};

/// A named knowledge record held by a library or the network store
///
/// Entries are opaque to the resolver beyond this shape: a name, a free-text
/// description the tiers match against, and a curation strength in
/// `[0.0, 1.0]` feeding the confidence model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Identifier of the pattern/record
    pub name: String,
    /// Free-text description matched against queries
    pub description: String,
    /// Match/curation strength in `[0.0, 1.0]`
    pub strength: f64,
}

impl KnowledgeEntry {
    /// Create a new entry; strength is clamped into `[0.0, 1.0]`
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        strength: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            strength: strength.clamp(0.0, 1.0),
        }
    }
}
