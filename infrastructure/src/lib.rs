//! Infrastructure layer for knowledge-cascade
//!
//! In-memory adapters for the application ports (domain library, peer
//! directory, local peers, network store), the configuration loader, and
//! the knowledge seed file format used by the CLI.

pub mod config;
pub mod directory;
pub mod knowledge_file;
pub mod library;
pub mod network;
pub mod peer;

// Re-export commonly used types
pub use config::{file_config::FileConfig, loader::ConfigLoader};
pub use directory::static_directory::StaticPeerDirectory;
pub use knowledge_file::{KnowledgeFile, SeedError};
pub use library::in_memory::InMemoryDomainLibrary;
pub use network::in_memory::InMemoryNetworkStore;
pub use peer::local_peer::LocalPeer;
