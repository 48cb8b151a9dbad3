use thiserror::Error;

/// Errors raised by predictors, the predictor registry and the evaluator.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("{operation} is not implemented for {class}")]
    NotImplemented {
        class: String,
        operation: &'static str,
    },

    #[error("Predictor class not registered: {name}")]
    UnknownPredictorClass { name: String },

    #[error("Predictor class already registered: {name}")]
    DuplicateRegistration { name: String },

    #[error("Invalid predictor record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("{class} requires `{field}` in its record")]
    MissingField { class: String, field: &'static str },

    #[error("No {kind} entry for predictor {predictor}")]
    EntryNotFound { kind: String, predictor: String },

    #[error("Entry {kind} for predictor {predictor} has no `{metric}` score")]
    MissingScore {
        kind: String,
        predictor: String,
        metric: String,
    },

    #[error("No stored prediction for key {key} ({dimension})")]
    PredictionNotFound { key: String, dimension: String },

    #[error("Invalid target `{name}`: {reason}")]
    InvalidTarget { name: String, reason: String },

    #[error("Unknown entry kind: {kind}")]
    UnknownEntryKind { kind: String },

    #[error("Unknown dimension: {value}. Valid: PE, KE, LCE")]
    UnknownDimension { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_formatting() {
        let error = PredictorError::NotImplemented {
            class: "ConstantPredictor".to_string(),
            operation: "model_predict",
        };

        let msg = error.to_string();
        assert!(msg.contains("model_predict"));
        assert!(msg.contains("ConstantPredictor"));
    }

    #[test]
    fn test_missing_score_formatting() {
        let error = PredictorError::MissingScore {
            kind: "prediction_KE".to_string(),
            predictor: "bert".to_string(),
            metric: "accuracy".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("prediction_KE"));
        assert!(msg.contains("bert"));
        assert!(msg.contains("`accuracy`"));
    }
}
