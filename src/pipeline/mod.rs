// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;

pub use orchestrator::{RunOutcome, SearchOrchestrator};
