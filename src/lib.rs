// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod database;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{Config, DatabaseConfig, OutputConfig};
pub use database::SurnameRepository;
pub use error::{Result, SearchError};
pub use exporter::{
    HtmlRenderer, JsonRenderer, OutputFormat, RenderedOutput, Renderer, ResultWriter,
};
pub use models::{MatchSet, SearchOutcome};
pub use pipeline::{RunOutcome, SearchOrchestrator};
pub use utils::{OperationTimer, PageTemplate, Validator};
