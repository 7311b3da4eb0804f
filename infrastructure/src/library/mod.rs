//! Domain library adapters.

pub mod in_memory;
