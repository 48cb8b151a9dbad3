//! Evaluation configuration parsing from environment variables.
//!
//! This module handles locating the predictor and instance files and the list
//! of metrics every predictor tracks.

use crate::domain::performance::default_perform_metrics;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Evaluation environment configuration
#[derive(Debug, Clone)]
pub struct EvaluationEnvConfig {
    pub predictors_file: PathBuf,
    pub instances_file: PathBuf,
    pub report_file: Option<PathBuf>,
    pub perform_metrics: Vec<String>,
}

impl EvaluationEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let predictors_file = lookup("PREDICTORS_FILE")
            .map(PathBuf::from)
            .context("PREDICTORS_FILE must point to a TOML or JSON predictors file")?;
        let instances_file = lookup("INSTANCES_FILE")
            .map(PathBuf::from)
            .context("INSTANCES_FILE must point to a JSON instances file")?;
        let report_file = lookup("REPORT_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let perform_metrics = match lookup("PERFORM_METRICS") {
            Some(raw) => Self::parse_metric_list(&raw)?,
            None => default_perform_metrics(),
        };

        Ok(Self {
            predictors_file,
            instances_file,
            report_file,
            perform_metrics,
        })
    }

    /// Comma separated metric names; blanks are dropped.
    fn parse_metric_list(raw: &str) -> Result<Vec<String>> {
        let metrics: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if metrics.is_empty() {
            anyhow::bail!("PERFORM_METRICS is set but lists no metric");
        }
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_evaluation_config_defaults() {
        let config = EvaluationEnvConfig::from_lookup(lookup(&[
            ("PREDICTORS_FILE", "predictors.toml"),
            ("INSTANCES_FILE", "instances.json"),
        ]))
        .unwrap();

        assert_eq!(config.predictors_file, PathBuf::from("predictors.toml"));
        assert_eq!(config.instances_file, PathBuf::from("instances.json"));
        assert!(config.report_file.is_none());
        assert_eq!(config.perform_metrics, default_perform_metrics());
    }

    #[test]
    fn test_metric_list_parsing() {
        let config = EvaluationEnvConfig::from_lookup(lookup(&[
            ("PREDICTORS_FILE", "p.json"),
            ("INSTANCES_FILE", "i.json"),
            ("REPORT_FILE", "out/report.json"),
            ("PERFORM_METRICS", " accuracy, accuracy_KE_Insufficient ,,"),
        ]))
        .unwrap();

        assert_eq!(config.report_file, Some(PathBuf::from("out/report.json")));
        assert_eq!(
            config.perform_metrics,
            vec!["accuracy".to_string(), "accuracy_KE_Insufficient".to_string()]
        );

        let result = EvaluationEnvConfig::from_lookup(lookup(&[
            ("PREDICTORS_FILE", "p.json"),
            ("INSTANCES_FILE", "i.json"),
            ("PERFORM_METRICS", " , "),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_required_files() {
        let result = EvaluationEnvConfig::from_lookup(lookup(&[("INSTANCES_FILE", "i.json")]));
        assert!(result.is_err());

        let result = EvaluationEnvConfig::from_lookup(lookup(&[("PREDICTORS_FILE", "p.json")]));
        assert!(result.is_err());
    }
}
