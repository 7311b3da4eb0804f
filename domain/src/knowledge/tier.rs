//! Knowledge tier identifiers

use serde::{Deserialize, Serialize};

/// One knowledge source consulted during escalation (Value Object)
///
/// The derived ordering IS the escalation order: `Local < History <
/// DomainLibrary < Peer < Network`. The engine walks
/// [`Tier::ESCALATION_ORDER`] front to back and never reorders it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    /// The agent's own recent activity window
    Local,
    /// The agent's full historical record
    History,
    /// The shared, curated, domain-scoped library
    DomainLibrary,
    /// Cross-domain peer collaboration (one-hop fan-out)
    Peer,
    /// The distributed, content-addressed network store (last resort)
    Network,
}

impl Tier {
    /// All tiers in escalation order, cheapest first
    pub const ESCALATION_ORDER: [Tier; 5] = [
        Tier::Local,
        Tier::History,
        Tier::DomainLibrary,
        Tier::Peer,
        Tier::Network,
    ];

    /// The next tier in escalation order, or `None` at the terminal tier
    pub fn next(&self) -> Option<Tier> {
        match self {
            Tier::Local => Some(Tier::History),
            Tier::History => Some(Tier::DomainLibrary),
            Tier::DomainLibrary => Some(Tier::Peer),
            Tier::Peer => Some(Tier::Network),
            Tier::Network => None,
        }
    }

    /// Whether this tier performs suspending I/O
    pub fn is_suspending(&self) -> bool {
        matches!(self, Tier::Peer | Tier::Network)
    }

    /// Short identifier used in logs and reasoning trails
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Local => "local",
            Tier::History => "history",
            Tier::DomainLibrary => "domain-library",
            Tier::Peer => "peer",
            Tier::Network => "network",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
