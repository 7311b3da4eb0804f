//! Responsibility domains

use serde::{Deserialize, Serialize};

/// A responsibility area an agent specializes in (Value Object)
///
/// This is a closed set: every running agent owns exactly one domain for
/// its lifetime, and the peer directory is keyed by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Infrastructure,
    Knowledge,
    Scalability,
    Quality,
    Security,
    Operations,
}

impl Domain {
    /// All domains, in a fixed order used for deterministic peer selection
    pub const ALL: [Domain; 6] = [
        Domain::Infrastructure,
        Domain::Knowledge,
        Domain::Scalability,
        Domain::Quality,
        Domain::Security,
        Domain::Operations,
    ];

    /// Get the string identifier for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Infrastructure => "infrastructure",
            Domain::Knowledge => "knowledge",
            Domain::Scalability => "scalability",
            Domain::Quality => "quality",
            Domain::Security => "security",
            Domain::Operations => "operations",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "infrastructure" => Ok(Domain::Infrastructure),
            "knowledge" => Ok(Domain::Knowledge),
            "scalability" => Ok(Domain::Scalability),
            "quality" => Ok(Domain::Quality),
            "security" => Ok(Domain::Security),
            "operations" => Ok(Domain::Operations),
            other => Err(format!("unknown domain: {}", other)),
        }
    }
}
