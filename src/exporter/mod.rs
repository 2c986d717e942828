// file: src/exporter/mod.rs
// description: result renderers and the output file writer
// reference: internal module structure

pub mod html;
pub mod json;
pub mod writer;

use crate::error::Result;
use crate::models::MatchSet;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use writer::ResultWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    /// Short identifier, also the output file extension.
    pub fn tag(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    pub fn renderer(self, pretty: bool) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Html => Box::new(HtmlRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new(pretty)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Converts a match set into a text body. Implementations are pure.
pub trait Renderer: Send + Sync {
    fn format(&self) -> OutputFormat;

    fn render(&self, matches: &MatchSet) -> Result<RenderedOutput>;
}

/// A rendered body tagged with the format that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    format: OutputFormat,
    body: String,
}

impl RenderedOutput {
    pub fn new(format: OutputFormat, body: String) -> Self {
        Self { format, body }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.format.tag())
    }
}
