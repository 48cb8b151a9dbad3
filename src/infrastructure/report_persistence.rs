//! Persistence for evaluated predictor summaries.
//!
//! The report is a JSON array of `{ perform, name, description }` objects,
//! with empty strata written as `"None"`.

use crate::domain::predictor::PredictorSummary;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Handles persistence of predictor summaries to disk.
pub struct ReportPersistence {
    file_path: PathBuf,
}

impl ReportPersistence {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Loads a previously saved report.
    pub fn load(&self) -> Result<Option<Vec<PredictorSummary>>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.file_path).context("Failed to read report file")?;
        let summaries: Vec<PredictorSummary> =
            serde_json::from_str(&content).context("Failed to parse report JSON")?;

        info!("Loaded report from {:?}", self.file_path);
        Ok(Some(summaries))
    }

    /// Saves the report, creating parent directories as needed.
    pub fn save(&self, summaries: &[PredictorSummary]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create report directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(summaries).context("Failed to serialize report")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp report file")?;
        fs::rename(&temp_path, &self.file_path).context("Failed to rename report file")?;

        info!(
            "Saved {} predictor summaries to {:?}",
            summaries.len(),
            self.file_path
        );
        Ok(())
    }
}
