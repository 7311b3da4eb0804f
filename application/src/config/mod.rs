//! Application configuration.

pub mod resolver_config;

pub use resolver_config::{ConfigError, ResolverConfig};
