//! Network tier adapters.

pub mod in_memory;
