//! Core domain primitives: the query value object and domain errors.

pub mod error;
pub mod query;
