//! Agent memory: the bounded local context window, the pruned history
//! log, and the lexical matching both are searched with.

pub mod context_window;
pub mod exchange;
pub mod history;
pub mod matching;
