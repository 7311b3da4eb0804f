//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod domain_library;
pub mod network;
pub mod observer;
pub mod peer;
