//! Knowledge seed files.
//!
//! TOML format the CLI uses to populate the shared library and the
//! network store before resolving:
//!
//! ```toml
//! [[library]]
//! domain = "scalability"
//! name = "sharding"
//! description = "shard the index with consistent hashing"
//! strength = 0.8
//!
//! [[network]]
//! query = "how to tune the write path"
//! name = "write-tuning"
//! description = "batch writes and fsync on a timer"
//! strength = 0.6
//! ```

use crate::library::in_memory::InMemoryDomainLibrary;
use crate::network::in_memory::InMemoryNetworkStore;
use cascade_domain::{Domain, KnowledgeEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors reading a knowledge seed file
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Cannot read knowledge file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed knowledge file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A curated library entry to seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySeed {
    pub domain: Domain,
    pub name: String,
    pub description: String,
    pub strength: f64,
}

/// A network-store entry to seed, addressed by its query text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSeed {
    pub query: String,
    pub name: String,
    pub description: String,
    pub strength: f64,
}

/// Parsed knowledge seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeFile {
    #[serde(default)]
    pub library: Vec<LibrarySeed>,
    #[serde(default)]
    pub network: Vec<NetworkSeed>,
}

impl KnowledgeFile {
    /// Read and parse a seed file
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Apply the seeds to a library and network store
    pub fn seed(&self, library: &InMemoryDomainLibrary, network: &InMemoryNetworkStore) {
        for seed in &self.library {
            library.insert(
                seed.domain,
                KnowledgeEntry::new(&seed.name, &seed.description, seed.strength),
            );
        }
        for seed in &self.network {
            network.publish(
                &seed.query,
                KnowledgeEntry::new(&seed.name, &seed.description, seed.strength),
            );
        }
    }
}
