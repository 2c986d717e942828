// file: src/database/mod.rs
// description: database operations module exports
// reference: internal module structure

pub mod client;
pub mod repository;

pub use repository::{SurnameRepository, like_prefix_pattern};
