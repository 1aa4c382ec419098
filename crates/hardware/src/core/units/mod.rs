//! Units attached to the execution engine.

/// Set-associative LRU caches and the one- or two-level hierarchy.
pub mod cache;
