//! Knowledge types: tiers, domains, entries, solutions, and the
//! confidence model that scores them.

pub mod confidence;
pub mod digest;
pub mod domain_area;
pub mod entry;
pub mod solution;
pub mod tier;
