// file: src/pipeline/orchestrator.rs
// description: coordinates prefix search, rendering, and result persistence
// reference: one-shot search workflow

use crate::database::SurnameRepository;
use crate::error::Result;
use crate::exporter::{OutputFormat, Renderer, ResultWriter};
use crate::models::SearchOutcome;
use crate::utils::OperationTimer;
use std::path::PathBuf;
use tracing::{info, warn};

/// Terminal states of a successful run. Failures are `SearchError`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written {
        path: PathBuf,
        format: OutputFormat,
        count: usize,
    },
    NoMatches {
        prefix: String,
    },
}

pub struct SearchOrchestrator {
    repository: SurnameRepository,
    renderer: Box<dyn Renderer>,
    writer: ResultWriter,
}

impl SearchOrchestrator {
    pub fn new(repository: SurnameRepository, renderer: Box<dyn Renderer>, writer: ResultWriter) -> Self {
        Self {
            repository,
            renderer,
            writer,
        }
    }

    /// Search, render, write. Nothing is written unless rendering succeeded
    /// and at least one surname matched.
    pub async fn run(&self, prefix: &str) -> Result<RunOutcome> {
        if prefix.is_empty() {
            warn!("Empty prefix matches every stored surname");
        }

        let matches = match self.repository.search(prefix).await? {
            SearchOutcome::Matches(matches) => matches,
            SearchOutcome::NoMatches => {
                info!("No surnames start with {:?}", prefix);
                return Ok(RunOutcome::NoMatches {
                    prefix: prefix.to_string(),
                });
            }
        };

        let timer = OperationTimer::new("render");
        let output = self.renderer.render(&matches)?;
        timer.finish();

        let path = self.writer.write(&output)?;

        Ok(RunOutcome::Written {
            path,
            format: output.format(),
            count: matches.len(),
        })
    }

    pub async fn close(self) {
        self.repository.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::test_support::{X_FILES, seeded_repository};
    use crate::error::SearchError;
    use crate::exporter::RenderedOutput;
    use crate::models::MatchSet;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn format(&self) -> OutputFormat {
            OutputFormat::Json
        }

        fn render(&self, _matches: &MatchSet) -> Result<RenderedOutput> {
            Err(SearchError::Serialization("encoder exploded".to_string()))
        }
    }

    async fn orchestrator(
        format: OutputFormat,
    ) -> (TempDir, TempDir, SearchOrchestrator) {
        let (db_dir, repository) = seeded_repository(&X_FILES).await;
        let out_dir = TempDir::new().unwrap();
        let writer = ResultWriter::new(out_dir.path(), "SearchResults").unwrap();
        let orchestrator = SearchOrchestrator::new(repository, format.renderer(false), writer);
        (db_dir, out_dir, orchestrator)
    }

    #[tokio::test]
    async fn test_json_scenario_writes_file() {
        let (_db, out, orchestrator) = orchestrator(OutputFormat::Json).await;

        let outcome = orchestrator.run("Sc").await.unwrap();
        let expected_path = out.path().join("SearchResults.json");

        assert_eq!(
            outcome,
            RunOutcome::Written {
                path: expected_path.clone(),
                format: OutputFormat::Json,
                count: 2,
            }
        );
        assert_eq!(
            fs::read_to_string(expected_path).unwrap(),
            r#"["Scull","Scully"]"#
        );
    }

    #[tokio::test]
    async fn test_html_scenario_writes_file() {
        let (_db, out, orchestrator) = orchestrator(OutputFormat::Html).await;

        orchestrator.run("Sc").await.unwrap();
        let body = fs::read_to_string(out.path().join("SearchResults.html")).unwrap();

        let scull = body.find("<li>Scull</li>").unwrap();
        let scully = body.find("<li>Scully</li>").unwrap();
        assert!(scull < scully);
        assert_eq!(body.matches("<li>").count(), 2);
    }

    #[tokio::test]
    async fn test_no_matches_writes_nothing() {
        let (_db, out, orchestrator) = orchestrator(OutputFormat::Html).await;

        let outcome = orchestrator.run("Zz").await.unwrap();

        assert_eq!(
            outcome,
            RunOutcome::NoMatches {
                prefix: "Zz".to_string()
            }
        );
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_render_failure_aborts_before_write() {
        let (_db_dir, repository) = seeded_repository(&X_FILES).await;
        let out = TempDir::new().unwrap();
        let writer = ResultWriter::new(out.path(), "SearchResults").unwrap();
        let orchestrator = SearchOrchestrator::new(repository, Box::new(FailingRenderer), writer);

        let result = orchestrator.run("Sc").await;

        assert!(matches!(result, Err(SearchError::Serialization(_))));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
