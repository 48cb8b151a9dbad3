use crate::domain::errors::PredictorError;
use crate::domain::instance::EvaluatedInstance;
use crate::domain::labels::{Label, Target};
use crate::domain::performance::{MetricValue, PerformanceEvaluator};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Raw prediction inputs, keyed by argument name.
pub type PredictInputs = HashMap<String, String>;

/// Model inputs for `model_predict`, keyed by target name.
pub type Targets = HashMap<String, Target>;

/// Capability implemented by every concrete predictor variant.
///
/// Both hooks fail with `NotImplemented` unless the variant overrides them.
pub trait Scoreable: Send + Sync {
    /// Registry name of the variant, used in diagnostics.
    fn class_name(&self) -> &str;

    /// Run the model on raw inputs.
    fn predict(&self, _inputs: &PredictInputs) -> Result<Label, PredictorError> {
        Err(PredictorError::NotImplemented {
            class: self.class_name().to_string(),
            operation: "predict",
        })
    }

    /// Run the model on targets, wrap the output as a label and record its performance.
    fn model_predict(
        &self,
        _predictor: &Predictor,
        _targets: &Targets,
    ) -> Result<Label, PredictorError> {
        Err(PredictorError::NotImplemented {
            class: self.class_name().to_string(),
            operation: "model_predict",
        })
    }
}

/// Serialized form of a predictor. The model handle is never included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorSummary {
    pub perform: BTreeMap<String, MetricValue>,
    pub name: String,
    pub description: String,
}

/// A named model plus the performance it achieved on the evaluated instances.
#[derive(Clone)]
pub struct Predictor {
    name: String,
    description: String,
    model: Arc<dyn Scoreable>,
    perform_metrics: Vec<String>,
    perform: BTreeMap<String, MetricValue>,
}

impl Predictor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        model: Arc<dyn Scoreable>,
        perform_metrics: Vec<String>,
    ) -> Self {
        let perform = perform_metrics
            .iter()
            .map(|m| (m.clone(), MetricValue::default()))
            .collect();
        Self {
            name: name.into(),
            description: description.into(),
            model,
            perform_metrics,
            perform,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model_class(&self) -> &str {
        self.model.class_name()
    }

    pub fn perform_metrics(&self) -> &[String] {
        &self.perform_metrics
    }

    pub fn perform(&self) -> &BTreeMap<String, MetricValue> {
        &self.perform
    }

    pub fn metric(&self, name: &str) -> Option<MetricValue> {
        self.perform.get(name).copied()
    }

    pub fn predict(&self, inputs: &PredictInputs) -> Result<Label, PredictorError> {
        self.model.predict(inputs)
    }

    pub fn model_predict(&self, targets: &Targets) -> Result<Label, PredictorError> {
        self.model.model_predict(self, targets)
    }

    /// Recompute `perform` from the entries this predictor left on `instances`.
    ///
    /// The new values are swapped in only once every metric has been computed.
    /// Without any `vid == 0` instance `perform` is left untouched.
    pub fn evaluate_performance<I: EvaluatedInstance>(
        &mut self,
        instances: &[I],
    ) -> Result<(), PredictorError> {
        let evaluator = PerformanceEvaluator::new(&self.name);
        let Some(results) = evaluator.evaluate(&self.perform_metrics, instances)? else {
            return Ok(());
        };

        let mut perform = self.perform.clone();
        perform.extend(results);
        self.perform = perform;
        Ok(())
    }

    pub fn serialize(&self) -> PredictorSummary {
        PredictorSummary {
            perform: self.perform.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl std::fmt::Display for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.model.class_name(), self.name)
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("class", &self.model.class_name())
            .field("name", &self.name)
            .field("description", &self.description)
            .field("perform", &self.perform)
            .finish()
    }
}
