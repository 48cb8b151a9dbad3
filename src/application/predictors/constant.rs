use crate::application::registry::PredictorSpec;
use crate::domain::errors::PredictorError;
use crate::domain::labels::{Category, Label};
use crate::domain::predictor::{PredictInputs, Predictor, Scoreable};
use std::sync::Arc;

/// Baseline that assigns the same category to every dimension of every input.
///
/// Only `predict` is provided; `model_predict` keeps the unimplemented default.
pub struct ConstantPredictor {
    category: Category,
}

impl ConstantPredictor {
    pub const CLASS_NAME: &'static str = "constant";

    pub fn new(category: Category) -> Self {
        Self { category }
    }

    pub fn build(spec: PredictorSpec, category: Category, perform_metrics: Vec<String>) -> Predictor {
        let name = spec.name.unwrap_or_else(|| Self::CLASS_NAME.to_string());
        let description = spec
            .description
            .unwrap_or_else(|| format!("Always predicts {}", category.label()));
        Predictor::new(name, description, Arc::new(Self::new(category)), perform_metrics)
    }
}

impl Scoreable for ConstantPredictor {
    fn class_name(&self) -> &str {
        Self::CLASS_NAME
    }

    fn predict(&self, _inputs: &PredictInputs) -> Result<Label, PredictorError> {
        Ok(Label::new(self.category.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::predictor::Targets;

    #[test]
    fn test_predicts_configured_category() {
        let predictor = ConstantPredictor::build(PredictorSpec::default(), Category::NotFound, Vec::new());
        assert_eq!(predictor.name(), "constant");
        assert_eq!(predictor.description(), "Always predicts Not Found");
        assert_eq!(
            predictor.predict(&PredictInputs::new()).unwrap().label,
            "Not Found"
        );
    }

    #[test]
    fn test_model_predict_is_not_implemented() {
        let predictor = ConstantPredictor::build(PredictorSpec::default(), Category::Acceptable, Vec::new());
        let err = predictor.model_predict(&Targets::new()).unwrap_err();
        assert_eq!(err.to_string(), "model_predict is not implemented for constant");
    }
}
