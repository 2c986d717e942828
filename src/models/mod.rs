// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod match_set;

pub use match_set::{MatchSet, SearchOutcome};
