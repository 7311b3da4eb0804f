//! Peer adapters.

pub mod local_peer;
