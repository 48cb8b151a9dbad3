use crate::domain::instance::Instance;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads evaluated instances from a JSON array on disk.
pub struct JsonInstanceRepository {
    file_path: PathBuf,
}

impl JsonInstanceRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Vec<Instance>> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read instances file {:?}", self.file_path))?;
        let instances: Vec<Instance> =
            serde_json::from_str(&content).context("Failed to parse instances JSON")?;

        let originals = instances.iter().filter(|i| i.vid == 0).count();
        info!(
            "Loaded {} instances ({} originals) from {:?}",
            instances.len(),
            originals,
            self.file_path
        );
        Ok(instances)
    }

    pub fn save(&self, instances: &[Instance]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(instances).context("Failed to serialize instances")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp instances file")?;
        fs::rename(&temp_path, &self.file_path).context("Failed to rename instances file")?;

        info!("Saved {} instances to {:?}", instances.len(), self.file_path);
        Ok(())
    }
}
