//! erranalyst evaluate - Predictor performance report
//!
//! Rebuilds every predictor listed in the predictors file through the
//! registry, evaluates it against the instances file and prints the
//! serialized summaries as JSON.
//!
//! # Usage
//! ```sh
//! PREDICTORS_FILE=predictors.toml INSTANCES_FILE=instances.json cargo run --bin evaluate
//! ```
//!
//! # Environment Variables
//! - `PREDICTORS_FILE` - TOML (`[[predictor]]`) or JSON predictor records
//! - `INSTANCES_FILE` - JSON array of instances with their entries
//! - `REPORT_FILE` - Optional path the report is also written to
//! - `PERFORM_METRICS` - Comma separated metric names (default: all known metrics)
//! - `LOG_FORMAT` - `pretty` (default) or `compact`

use anyhow::{Context, Result};
use erranalyst::application::registry::PredictorRegistry;
use erranalyst::config::{Config, LoggingEnvConfig};
use erranalyst::infrastructure::logging::init_tracing;
use erranalyst::infrastructure::{JsonInstanceRepository, ReportPersistence, load_predictor_records};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing(&LoggingEnvConfig::from_env()?);
    info!("erranalyst {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let evaluation = &config.evaluation;
    info!(
        "Configuration loaded: Predictors={:?}, Instances={:?}, Metrics={}",
        evaluation.predictors_file,
        evaluation.instances_file,
        evaluation.perform_metrics.len()
    );

    let registry = PredictorRegistry::with_builtin(&evaluation.perform_metrics);
    info!("Registered predictor classes: {:?}", registry.registered_names());

    let records = load_predictor_records(&evaluation.predictors_file)?;
    let instances = JsonInstanceRepository::new(&evaluation.instances_file).load()?;

    let mut summaries = Vec::with_capacity(records.len());
    for record in records {
        let model_class = record.model_class.clone();
        let mut predictor = registry
            .create_from_json(record)
            .with_context(|| format!("Failed to create predictor of class {}", model_class))?;

        predictor
            .evaluate_performance(&instances)
            .with_context(|| format!("Failed to evaluate {}", predictor))?;

        for (metric, value) in predictor.perform() {
            if value.is_unavailable() {
                warn!("{} {}: no instance in stratum", predictor, metric);
            } else {
                info!("{} {}: {}", predictor, metric, value);
            }
        }
        summaries.push(predictor.serialize());
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&summaries).context("Failed to serialize report")?
    );

    if let Some(report_file) = &evaluation.report_file {
        ReportPersistence::new(report_file).save(&summaries)?;
    }

    info!("Evaluated {} predictors.", summaries.len());
    Ok(())
}
