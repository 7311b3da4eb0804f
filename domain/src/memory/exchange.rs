//! Recorded query/solution exchanges.

use crate::core::query::Query;
use crate::knowledge::solution::Solution;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved (query, solution) pair recorded in agent memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// The query as it was asked
    pub query: Query,
    /// The solution the escalation produced for it
    pub solution: Solution,
    /// When the exchange was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Exchange {
    /// Record an exchange at the current instant
    pub fn new(query: Query, solution: Solution) -> Self {
        Self {
            query,
            solution,
            recorded_at: Utc::now(),
        }
    }
}
