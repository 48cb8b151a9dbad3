//! Name-keyed predictor registry.
//!
//! Every concrete predictor variant registers a factory under a string name
//! when the registry is built. Serialized predictor records name their
//! variant in `model_class`, which is resolved through this table.

use crate::application::predictors::{ConstantPredictor, PrecomputedPredictor};
use crate::domain::errors::PredictorError;
use crate::domain::labels::Category;
use crate::domain::predictor::Predictor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Serialized definition of a predictor, as stored in predictor files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorRecord {
    pub model_class: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    #[serde(default)]
    pub model_online_path: Option<String>,
}

/// Construction arguments handed to a factory. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictorSpec {
    pub name: Option<String>,
    pub description: Option<String>,
    pub model_path: Option<PathBuf>,
    pub model_online_path: Option<String>,
}

impl From<PredictorRecord> for PredictorSpec {
    fn from(record: PredictorRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            model_path: record.model_path,
            model_online_path: record.model_online_path,
        }
    }
}

pub type PredictorFactory =
    Arc<dyn Fn(PredictorSpec) -> Result<Predictor, PredictorError> + Send + Sync>;

#[derive(Clone, Default)]
pub struct PredictorRegistry {
    factories: HashMap<String, PredictorFactory>,
}

impl PredictorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in variants, each tracking `perform_metrics`.
    pub fn with_builtin(perform_metrics: &[String]) -> Self {
        let mut registry = Self::new();

        let metrics = perform_metrics.to_vec();
        registry.insert(
            PrecomputedPredictor::CLASS_NAME,
            Arc::new(move |spec: PredictorSpec| PrecomputedPredictor::build(spec, metrics.clone())),
        );

        let metrics = perform_metrics.to_vec();
        registry.insert(
            ConstantPredictor::CLASS_NAME,
            Arc::new(move |spec: PredictorSpec| {
                Ok(ConstantPredictor::build(
                    spec,
                    Category::Acceptable,
                    metrics.clone(),
                ))
            }),
        );

        registry
    }

    fn insert(&mut self, name: &str, factory: PredictorFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: PredictorFactory,
    ) -> Result<(), PredictorError> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(PredictorError::DuplicateRegistration { name });
        }
        debug!("Registered predictor class {}", name);
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&PredictorFactory, PredictorError> {
        self.factories
            .get(name)
            .ok_or_else(|| PredictorError::UnknownPredictorClass {
                name: name.to_string(),
            })
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn registered_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Rebuild a predictor from its record. Lookup and construction errors propagate as-is.
    pub fn create_from_json(&self, record: PredictorRecord) -> Result<Predictor, PredictorError> {
        let factory = self.lookup(&record.model_class)?;
        factory(PredictorSpec::from(record))
    }

    pub fn create_from_value(&self, raw: serde_json::Value) -> Result<Predictor, PredictorError> {
        self.create_from_json(serde_json::from_value(raw)?)
    }

    pub fn create_from_str(&self, raw: &str) -> Result<Predictor, PredictorError> {
        self.create_from_json(serde_json::from_str(raw)?)
    }
}

impl std::fmt::Debug for PredictorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictorRegistry")
            .field("classes", &self.registered_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::performance::default_perform_metrics;
    use crate::domain::predictor::Scoreable;

    struct EchoModel;

    impl Scoreable for EchoModel {
        fn class_name(&self) -> &str {
            "echo"
        }
    }

    fn echo_factory() -> PredictorFactory {
        Arc::new(|spec: PredictorSpec| {
            Ok(Predictor::new(
                spec.name.unwrap_or_else(|| "echo".to_string()),
                spec.description.unwrap_or_default(),
                Arc::new(EchoModel),
                vec!["accuracy".to_string()],
            ))
        })
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PredictorRegistry::new();
        registry.register("echo", echo_factory()).unwrap();

        assert!(registry.is_registered("echo"));
        assert!(registry.lookup("echo").is_ok());
        assert!(matches!(
            registry.lookup("missing"),
            Err(PredictorError::UnknownPredictorClass { .. })
        ));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = PredictorRegistry::new();
        registry.register("echo", echo_factory()).unwrap();
        let err = registry.register("echo", echo_factory()).unwrap_err();
        assert!(matches!(err, PredictorError::DuplicateRegistration { name } if name == "echo"));
    }

    #[test]
    fn test_absent_fields_reach_factory_as_none() {
        let mut registry = PredictorRegistry::new();
        registry
            .register(
                "inspect",
                Arc::new(|spec: PredictorSpec| {
                    assert_eq!(spec, PredictorSpec::default());
                    Ok(Predictor::new("inspect", "", Arc::new(EchoModel), Vec::new()))
                }),
            )
            .unwrap();

        registry
            .create_from_str(r#"{"model_class": "inspect"}"#)
            .unwrap();
    }

    #[test]
    fn test_create_from_json_fields() {
        let mut registry = PredictorRegistry::new();
        registry.register("echo", echo_factory()).unwrap();

        let predictor = registry
            .create_from_value(serde_json::json!({
                "model_class": "echo",
                "name": "E",
                "description": "echo model",
                "perform": {"accuracy": 0.25}
            }))
            .unwrap();
        assert_eq!(predictor.name(), "E");
        assert_eq!(predictor.description(), "echo model");
        assert_eq!(predictor.to_string(), "echo E");
    }

    #[test]
    fn test_create_from_json_errors() {
        let registry = PredictorRegistry::new();

        let err = registry
            .create_from_str(r#"{"model_class": "nope"}"#)
            .unwrap_err();
        assert!(matches!(err, PredictorError::UnknownPredictorClass { name } if name == "nope"));

        let err = registry.create_from_str(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, PredictorError::InvalidRecord(_)));
    }

    #[test]
    fn test_builtin_classes() {
        let registry = PredictorRegistry::with_builtin(&default_perform_metrics());
        assert_eq!(registry.registered_names(), vec!["constant", "precomputed"]);
    }
}
