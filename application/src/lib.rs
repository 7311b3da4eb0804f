//! Application layer for knowledge-cascade
//!
//! This crate contains the escalation engine use case, the agent façade,
//! and the port definitions the infrastructure layer implements. It depends
//! only on the domain layer.

pub mod agent;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use agent::Agent;
pub use config::resolver_config::{ConfigError, ResolverConfig};
pub use ports::{
    domain_library::{DomainLibrary, LibraryError},
    network::{NetworkClient, NetworkError},
    observer::{EscalationObserver, NoObserver},
    peer::{PeerAgent, PeerDirectory, PeerError},
};
pub use use_cases::resolve_query::{ResolveError, ResolveOptions};
