//! Peer directory adapters.

pub mod static_directory;
