//! Query value object

use crate::core::error::DomainError;
use crate::knowledge::domain_area::Domain;
use serde::{Deserialize, Serialize};

/// An immutable question posed to an agent (Value Object)
///
/// Carries the free-text description, an ordered list of context snippets
/// (most recent first), and zero or more domain hints. The description must
/// be non-empty; [`Query::validate`] is checked by the resolver before any
/// escalation begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    description: String,
    #[serde(default)]
    context: Vec<String>,
    #[serde(default)]
    hints: Vec<Domain>,
}

impl Query {
    /// Create a new query from a free-text description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            context: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// Add a context snippet (most recent first)
    pub fn with_context(mut self, snippet: impl Into<String>) -> Self {
        self.context.push(snippet.into());
        self
    }

    /// Add a domain hint
    pub fn with_hint(mut self, hint: Domain) -> Self {
        self.hints.push(hint);
        self
    }

    /// Validate the query invariants
    ///
    /// The only caller-visible failure of the whole resolve path originates
    /// here: an empty or whitespace-only description.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.description.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "description must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the context snippets, most recent first
    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// Get the domain hints
    pub fn hints(&self) -> &[Domain] {
        &self.hints
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}
