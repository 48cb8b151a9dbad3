use erranalyst::application::registry::{PredictorRegistry, PredictorSpec};
use erranalyst::domain::errors::PredictorError;
use erranalyst::domain::performance::default_perform_metrics;
use erranalyst::domain::predictor::{PredictInputs, Predictor, Scoreable};
use std::sync::Arc;

struct TaggerModel;

impl Scoreable for TaggerModel {
    fn class_name(&self) -> &str {
        "tagger"
    }
}

fn registry() -> PredictorRegistry {
    let mut registry = PredictorRegistry::with_builtin(&default_perform_metrics());
    registry
        .register(
            "tagger",
            Arc::new(|spec: PredictorSpec| {
                Ok(Predictor::new(
                    spec.name.unwrap_or_default(),
                    spec.description.unwrap_or_default(),
                    Arc::new(TaggerModel),
                    vec!["accuracy".to_string(), "accuracy_LCE_NotFound".to_string()],
                ))
            }),
        )
        .unwrap();
    registry
}

#[test]
fn test_serialize_then_recreate() {
    let registry = registry();
    let original = registry
        .create_from_str(r#"{"model_class": "tagger", "name": "T1", "description": "sequence tagger"}"#)
        .unwrap();

    let mut raw = serde_json::to_value(original.serialize()).unwrap();
    raw["model_class"] = serde_json::Value::from(original.model_class());

    let rebuilt = registry.create_from_value(raw).unwrap();
    assert_eq!(rebuilt.name(), original.name());
    assert_eq!(rebuilt.description(), original.description());
    assert_eq!(rebuilt.to_string(), "tagger T1");
}

#[test]
fn test_unknown_class_propagates() {
    let err = registry()
        .create_from_str(r#"{"model_class": "svm", "name": "S"}"#)
        .unwrap_err();
    assert!(matches!(err, PredictorError::UnknownPredictorClass { ref name } if name == "svm"));
    assert_eq!(err.to_string(), "Predictor class not registered: svm");
}

#[test]
fn test_factory_failure_propagates() {
    let err = registry()
        .create_from_str(r#"{"model_class": "precomputed", "name": "no-path"}"#)
        .unwrap_err();
    assert!(matches!(err, PredictorError::MissingField { .. }));
}

#[test]
fn test_builtin_constant_predictor() {
    let predictor = registry()
        .create_from_str(r#"{"model_class": "constant", "name": "baseline"}"#)
        .unwrap();

    assert_eq!(predictor.to_string(), "constant baseline");
    assert_eq!(predictor.perform().len(), 13);
    assert_eq!(
        predictor.predict(&PredictInputs::new()).unwrap().label,
        "Acceptable"
    );
}

#[test]
fn test_base_predict_is_not_implemented() {
    let predictor = registry()
        .create_from_str(r#"{"model_class": "tagger"}"#)
        .unwrap();

    let err = predictor.predict(&PredictInputs::new()).unwrap_err();
    assert!(matches!(err, PredictorError::NotImplemented { .. }));
}
