// file: src/exporter/json.rs
// description: JSON array renderer for search results
// reference: https://docs.rs/serde_json

use crate::error::Result;
use crate::exporter::{OutputFormat, RenderedOutput, Renderer};
use crate::models::MatchSet;

#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    /// Encoding errors are returned, never replaced by a placeholder body.
    fn render(&self, matches: &MatchSet) -> Result<RenderedOutput> {
        let body = if self.pretty {
            serde_json::to_string_pretty(matches)?
        } else {
            serde_json::to_string(matches)?
        };

        Ok(RenderedOutput::new(OutputFormat::Json, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(names: &[&str]) -> MatchSet {
        MatchSet::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_scenario_compact_array() {
        let output = JsonRenderer::new(false).render(&set(&["Scull", "Scully"])).unwrap();

        assert_eq!(output.format(), OutputFormat::Json);
        assert_eq!(output.body(), r#"["Scull","Scully"]"#);
    }

    #[test]
    fn test_round_trip() {
        let names = set(&["Mulder", "O\"Neil", "Zoë", "Scully", "Scully"]);

        for pretty in [false, true] {
            let output = JsonRenderer::new(pretty).render(&names).unwrap();
            let parsed: Vec<String> = serde_json::from_str(output.body()).unwrap();
            assert_eq!(parsed, names.clone().into_vec());
        }
    }

    #[test]
    fn test_pretty_output() {
        let output = JsonRenderer::new(true).render(&set(&["Skin"])).unwrap();
        assert_eq!(output.body(), "[\n  \"Skin\"\n]");
    }
}
