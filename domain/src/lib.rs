//! Domain layer for knowledge-cascade
//!
//! This crate contains the core business logic of the confidence-escalation
//! resolver. It has no dependencies on infrastructure or async concerns.
//!
//! # Core Concepts
//!
//! ## Escalation
//!
//! An agent answers a query by walking knowledge tiers from cheapest to most
//! expensive (`Local < History < DomainLibrary < Peer < Network`), stopping
//! as soon as a [`Solution`] clears the confidence threshold.
//!
//! ## Confidence
//!
//! Every tier produces a confidence in `[0.0, 1.0]`. A tier that finds
//! nothing reports exactly `0.0` — "no match" is data, never an error.

pub mod core;
pub mod knowledge;
pub mod memory;

// Re-export commonly used types
pub use crate::core::{error::DomainError, query::Query};
pub use knowledge::{
    confidence,
    digest::QueryDigest,
    domain_area::Domain,
    entry::KnowledgeEntry,
    solution::Solution,
    tier::Tier,
};
pub use memory::{
    context_window::ContextWindow,
    exchange::Exchange,
    history::HistoryLog,
    matching::{best_match, overlap, MatchHit},
};
