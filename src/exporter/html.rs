// file: src/exporter/html.rs
// description: HTML list renderer for search results

use crate::error::Result;
use crate::exporter::{OutputFormat, RenderedOutput, Renderer};
use crate::models::MatchSet;
use crate::utils::PageTemplate;

const TITLE: &str = "Search results";
const HEADING: &str = "Found surnames:";

pub struct HtmlRenderer {
    template: PageTemplate,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            template: PageTemplate::new(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, matches: &MatchSet) -> Result<RenderedOutput> {
        let mut items = String::new();
        for surname in matches.iter() {
            items.push_str("\t\t<li>");
            items.push_str(&escape_html(surname));
            items.push_str("</li>\n");
        }

        let body = self.template.generate(TITLE, HEADING, &items);
        Ok(RenderedOutput::new(OutputFormat::Html, body))
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
