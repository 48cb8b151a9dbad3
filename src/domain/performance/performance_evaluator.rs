use crate::domain::errors::PredictorError;
use crate::domain::instance::EvaluatedInstance;
use crate::domain::labels::{Category, Dimension, EntryKind, Label};
use crate::domain::performance::metric_value::MetricValue;
use crate::domain::performance::metrics::{ACCURACY, PerformMetric};
use tracing::{debug, warn};

/// Computes a predictor's aggregate metrics from the entries stored on instances.
///
/// Only original instances (`vid == 0`) are aggregated; perturbed variants never
/// count toward a predictor's own numbers.
pub struct PerformanceEvaluator<'a> {
    predictor_name: &'a str,
}

impl<'a> PerformanceEvaluator<'a> {
    pub fn new(predictor_name: &'a str) -> Self {
        Self { predictor_name }
    }

    /// Compute every handled metric in `metrics`.
    ///
    /// Returns `None` when no instance has `vid == 0`. Unhandled metric names are
    /// absent from the result so callers keep their previous values.
    pub fn evaluate<I: EvaluatedInstance>(
        &self,
        metrics: &[String],
        instances: &[I],
    ) -> Result<Option<Vec<(String, MetricValue)>>, PredictorError> {
        let originals: Vec<&I> = instances.iter().filter(|i| i.vid() == 0).collect();
        if originals.is_empty() {
            warn!(
                "No evaluable instances for predictor {} ({} perturbed variants skipped)",
                self.predictor_name,
                instances.len()
            );
            return Ok(None);
        }

        let mut results = Vec::with_capacity(metrics.len());
        for name in metrics {
            let value = match PerformMetric::parse(name) {
                Some(PerformMetric::Accuracy) => self.accuracy(&originals)?,
                Some(PerformMetric::Stratified {
                    dimension,
                    category,
                }) => self.stratified_accuracy(&originals, dimension, category)?,
                None => {
                    debug!("Skipping unhandled metric {} for {}", name, self.predictor_name);
                    continue;
                }
            };
            results.push((name.clone(), value));
        }

        Ok(Some(results))
    }

    /// Share of instances whose PE, KE and LCE predictions are all correct.
    fn accuracy<I: EvaluatedInstance>(&self, instances: &[&I]) -> Result<MetricValue, PredictorError> {
        let mut correct = 0;
        for instance in instances {
            let mut all_correct = true;
            for dimension in Dimension::ALL {
                let kind = EntryKind::Prediction(dimension);
                let score = self
                    .entry(*instance, kind)?
                    .score(ACCURACY)
                    .ok_or_else(|| PredictorError::MissingScore {
                        kind: kind.to_string(),
                        predictor: self.predictor_name.to_string(),
                        metric: ACCURACY.to_string(),
                    })?;
                all_correct &= is_one(score);
            }
            if all_correct {
                correct += 1;
            }
        }

        Ok(MetricValue::ratio(correct, instances.len()))
    }

    /// Accuracy within the stratum of instances predicted as `category` on `dimension`.
    fn stratified_accuracy<I: EvaluatedInstance>(
        &self,
        instances: &[&I],
        dimension: Dimension,
        category: Category,
    ) -> Result<MetricValue, PredictorError> {
        let stratum = stratum_dimension(dimension, category);
        let mut members = 0;
        let mut matches = 0;
        for instance in instances {
            let predicted = &self.entry(*instance, EntryKind::Prediction(stratum))?.label;
            if predicted != category.label() {
                continue;
            }
            members += 1;

            let truth = &self.entry(*instance, EntryKind::GroundTruth(dimension))?.label;
            if predicted == truth {
                matches += 1;
            }
        }

        Ok(MetricValue::ratio(matches, members))
    }

    fn entry<'i, I: EvaluatedInstance>(
        &self,
        instance: &'i I,
        kind: EntryKind,
    ) -> Result<&'i Label, PredictorError> {
        instance
            .get_entry(kind, self.predictor_name)
            .ok_or_else(|| PredictorError::EntryNotFound {
                kind: kind.to_string(),
                predictor: self.predictor_name.to_string(),
            })
    }
}

/// Dimension whose prediction selects the stratum for a stratified metric.
///
/// `accuracy_LCE_NotFound` selects its stratum from the KE prediction while
/// comparing against the LCE ground truth.
pub fn stratum_dimension(dimension: Dimension, category: Category) -> Dimension {
    match (dimension, category) {
        (Dimension::Lce, Category::NotFound) => Dimension::Ke,
        _ => dimension,
    }
}

fn is_one(score: f64) -> bool {
    (score - 1.0).abs() < f64::EPSILON
}
