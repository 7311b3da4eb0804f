//! Use cases.

pub mod resolve_query;
