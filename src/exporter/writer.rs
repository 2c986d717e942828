// file: src/exporter/writer.rs
// description: persists rendered results next to the working directory
// reference: write-then-rename file replacement

use crate::error::{Result, SearchError};
use crate::exporter::RenderedOutput;
use crate::utils::Validator;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ResultWriter {
    output_dir: PathBuf,
    file_stem: String,
}

impl ResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>, file_stem: &str) -> Result<Self> {
        let output_dir = output_dir.into();
        Validator::validate_directory(&output_dir)?;
        Validator::validate_file_stem(file_stem)?;

        Ok(Self {
            output_dir,
            file_stem: file_stem.to_string(),
        })
    }

    pub fn target_path(&self, output: &RenderedOutput) -> PathBuf {
        self.output_dir.join(output.file_name(&self.file_stem))
    }

    /// Write the body to a sibling temp file, then rename it over the target.
    /// On failure the temp file is removed and any previous target survives.
    pub fn write(&self, output: &RenderedOutput) -> Result<PathBuf> {
        let target = self.target_path(output);
        let staging = self
            .output_dir
            .join(format!(".{}.tmp", output.file_name(&self.file_stem)));

        debug!("Staging results in {}", staging.display());

        if let Err(source) = fs::write(&staging, output.body()) {
            let _ = fs::remove_file(&staging);
            return Err(SearchError::FileOperation {
                path: staging,
                source,
            });
        }

        if let Err(source) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(SearchError::FileOperation {
                path: target,
                source,
            });
        }

        info!(
            "Wrote {} bytes to {}",
            output.body().len(),
            target.display()
        );
        Ok(target)
    }
}
