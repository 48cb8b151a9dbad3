//! Loading of predictor records from TOML or JSON files.
//!
//! TOML files list records as `[[predictor]]` tables; JSON files hold an
//! array of record objects.

use crate::application::registry::PredictorRecord;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct PredictorsFile {
    #[serde(default)]
    predictor: Vec<PredictorRecord>,
}

pub fn load_predictor_records(path: &Path) -> Result<Vec<PredictorRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read predictors file {:?}", path))?;

    let records = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml(&content)?,
        Some("json") => parse_json(&content)?,
        other => anyhow::bail!(
            "Unsupported predictors file extension {:?}. Must be .toml or .json",
            other
        ),
    };

    info!("Loaded {} predictor records from {:?}", records.len(), path);
    Ok(records)
}

fn parse_toml(content: &str) -> Result<Vec<PredictorRecord>> {
    let file: PredictorsFile = toml::from_str(content).context("Failed to parse predictors TOML")?;
    Ok(file.predictor)
}

fn parse_json(content: &str) -> Result<Vec<PredictorRecord>> {
    serde_json::from_str(content).context("Failed to parse predictors JSON")
}
