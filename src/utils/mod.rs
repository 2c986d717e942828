// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod telemetry;
pub mod template;
pub mod validation;

pub use telemetry::OperationTimer;
pub use template::PageTemplate;
pub use validation::Validator;
