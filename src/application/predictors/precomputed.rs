use crate::application::registry::PredictorSpec;
use crate::domain::errors::PredictorError;
use crate::domain::labels::{Dimension, Label};
use crate::domain::performance::metrics::ACCURACY;
use crate::domain::predictor::{PredictInputs, Predictor, Scoreable, Targets};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Stored labels per instance key: `key -> { "PE" | "KE" | "LCE" -> label }`.
type PredictionTable = HashMap<String, BTreeMap<String, String>>;

/// Replays predictions that were produced offline and saved as JSON.
pub struct PrecomputedPredictor {
    predictions: PredictionTable,
    model_path: PathBuf,
}

impl PrecomputedPredictor {
    pub const CLASS_NAME: &'static str = "precomputed";

    pub fn new(model_path: PathBuf) -> Self {
        let mut predictor = Self {
            predictions: HashMap::new(),
            model_path,
        };
        predictor.load_predictions();
        predictor
    }

    pub fn from_table(predictions: PredictionTable) -> Self {
        Self {
            predictions,
            model_path: PathBuf::new(),
        }
    }

    /// Factory used by the registry.
    pub fn build(spec: PredictorSpec, perform_metrics: Vec<String>) -> Result<Predictor, PredictorError> {
        let model_path = spec.model_path.ok_or_else(|| PredictorError::MissingField {
            class: Self::CLASS_NAME.to_string(),
            field: "model_path",
        })?;
        if let Some(online) = &spec.model_online_path {
            debug!("Ignoring model_online_path {} for precomputed predictions", online);
        }

        let name = spec.name.unwrap_or_else(|| Self::default_name(&model_path));
        let description = spec
            .description
            .unwrap_or_else(|| format!("Predictions replayed from {}", model_path.display()));

        Ok(Predictor::new(
            name,
            description,
            Arc::new(Self::new(model_path)),
            perform_metrics,
        ))
    }

    fn default_name(model_path: &Path) -> String {
        model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(Self::CLASS_NAME)
            .to_string()
    }

    fn load_predictions(&mut self) {
        if !self.model_path.exists() {
            warn!(
                "Prediction file not found at {:?}. Predictor has no stored predictions.",
                self.model_path
            );
            return;
        }

        match File::open(&self.model_path) {
            Ok(file) => match serde_json::from_reader::<_, PredictionTable>(BufReader::new(file)) {
                Ok(predictions) => {
                    info!(
                        "Loaded {} stored predictions from {:?}",
                        predictions.len(),
                        self.model_path
                    );
                    self.predictions = predictions;
                }
                Err(e) => {
                    error!("Failed to parse prediction file: {}", e);
                }
            },
            Err(e) => {
                error!("Failed to open prediction file: {}", e);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    fn lookup(&self, key: &str, dimension: Dimension) -> Result<Label, PredictorError> {
        self.predictions
            .get(key)
            .and_then(|labels| labels.get(dimension.as_str()))
            .map(Label::new)
            .ok_or_else(|| PredictorError::PredictionNotFound {
                key: key.to_string(),
                dimension: dimension.to_string(),
            })
    }
}

fn required<'a>(value: Option<&'a String>, name: &str) -> Result<&'a str, PredictorError> {
    value
        .map(String::as_str)
        .ok_or_else(|| PredictorError::InvalidTarget {
            name: name.to_string(),
            reason: "missing".to_string(),
        })
}

impl Scoreable for PrecomputedPredictor {
    fn class_name(&self) -> &str {
        Self::CLASS_NAME
    }

    fn predict(&self, inputs: &PredictInputs) -> Result<Label, PredictorError> {
        let key = required(inputs.get("key"), "key")?;
        let dimension: Dimension = required(inputs.get("dimension"), "dimension")?.parse()?;
        self.lookup(key, dimension)
    }

    fn model_predict(&self, predictor: &Predictor, targets: &Targets) -> Result<Label, PredictorError> {
        let inputs: PredictInputs = ["key", "dimension"]
            .into_iter()
            .filter_map(|name| targets.get(name).map(|t| (name.to_string(), t.text.clone())))
            .collect();
        let label = self.predict(&inputs)?;

        let Some(truth) = targets.get("groundtruth") else {
            return Ok(label);
        };
        let score = if label.label == truth.text { 1.0 } else { 0.0 };
        debug!("{} scored {} on {:?}", predictor, score, inputs.get("key"));
        Ok(label.with_score(ACCURACY, score))
    }
}
