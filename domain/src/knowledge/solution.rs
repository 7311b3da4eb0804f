//! Solution value object - the output of every tier and of the resolver.

use crate::knowledge::tier::Tier;
use serde::{Deserialize, Serialize};

/// Answer produced by a tier or by the escalation engine (Value Object)
///
/// Invariant: `confidence` is always in `[0.0, 1.0]`. A tier that finds
/// nothing returns a solution with confidence exactly `0.0` and an empty
/// recommendation — never a missing value, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// The recommended answer; empty when nothing was found
    pub recommendation: String,
    /// Ordered reasoning statements (provenance trail)
    pub reasoning: Vec<String>,
    /// Confidence score in `[0.0, 1.0]`
    pub confidence: f64,
    /// The tier that produced this solution
    pub tier: Tier,
}

impl Solution {
    /// Create a solution carrying an actual recommendation
    pub fn found(
        tier: Tier,
        recommendation: impl Into<String>,
        confidence: f64,
        reasoning: Vec<String>,
    ) -> Self {
        Self {
            recommendation: recommendation.into(),
            reasoning,
            confidence: confidence.clamp(0.0, 1.0),
            tier,
        }
    }

    /// Create the "nothing found" solution for a tier
    pub fn none(tier: Tier) -> Self {
        Self {
            recommendation: String::new(),
            reasoning: vec![format!("{} tier: no match", tier)],
            confidence: 0.0,
            tier,
        }
    }

    /// Create the degraded solution for an unreachable or timed-out source
    ///
    /// Escalation continues past it; the note lands in the provenance trail
    /// so the caller can see which source was skipped.
    pub fn unavailable(tier: Tier, note: impl Into<String>) -> Self {
        Self {
            recommendation: String::new(),
            reasoning: vec![format!("{} tier unavailable: {}", tier, note.into())],
            confidence: 0.0,
            tier,
        }
    }

    /// Append a reasoning statement
    pub fn with_reasoning(mut self, statement: impl Into<String>) -> Self {
        self.reasoning.push(statement.into());
        self
    }

    /// Whether this solution carries an actual recommendation
    pub fn has_recommendation(&self) -> bool {
        !self.recommendation.is_empty()
    }

    /// Whether this solution clears the given confidence threshold
    pub fn meets(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}
