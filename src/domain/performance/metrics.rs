use crate::domain::labels::{Category, Dimension};

pub const ACCURACY: &str = "accuracy";

/// A performance metric the evaluator knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformMetric {
    /// Instance counts as correct only when PE, KE and LCE are all correct.
    Accuracy,
    /// Accuracy within the stratum of instances predicted as `category`.
    Stratified {
        dimension: Dimension,
        category: Category,
    },
}

impl PerformMetric {
    /// Parse a metric name. Names the evaluator does not handle yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        if name == ACCURACY {
            return Some(PerformMetric::Accuracy);
        }

        let rest = name.strip_prefix("accuracy_")?;
        let (dimension, category) = rest.split_once('_')?;
        Some(PerformMetric::Stratified {
            dimension: dimension.parse().ok()?,
            category: Category::from_metric_suffix(category)?,
        })
    }

    pub fn name(&self) -> String {
        match self {
            PerformMetric::Accuracy => ACCURACY.to_string(),
            PerformMetric::Stratified {
                dimension,
                category,
            } => format!("accuracy_{}_{}", dimension, category.metric_suffix()),
        }
    }

    /// `accuracy` followed by the twelve stratified metrics.
    pub fn all() -> Vec<PerformMetric> {
        let mut metrics = vec![PerformMetric::Accuracy];
        for dimension in Dimension::ALL {
            for category in Category::ALL {
                metrics.push(PerformMetric::Stratified {
                    dimension,
                    category,
                });
            }
        }
        metrics
    }
}

impl std::fmt::Display for PerformMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Metric names tracked when no explicit list is configured.
pub fn default_perform_metrics() -> Vec<String> {
    PerformMetric::all().iter().map(PerformMetric::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_metric_names() {
        let names = default_perform_metrics();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "accuracy");
        assert!(names.contains(&"accuracy_PE_Acceptable".to_string()));
        assert!(names.contains(&"accuracy_KE_Insufficient".to_string()));
        assert!(names.contains(&"accuracy_LCE_NotFound".to_string()));

        for name in &names {
            let metric = PerformMetric::parse(name).unwrap();
            assert_eq!(&metric.name(), name);
        }
    }

    #[test]
    fn test_unknown_metric_names() {
        assert_eq!(PerformMetric::parse("f1"), None);
        assert_eq!(PerformMetric::parse("accuracy_PE"), None);
        assert_eq!(PerformMetric::parse("accuracy_XE_Acceptable"), None);
        assert_eq!(PerformMetric::parse("accuracy_PE_Not Found"), None);
        assert_eq!(PerformMetric::parse("accuracy_pe_Acceptable"), None);
        assert_eq!(PerformMetric::parse("Accuracy"), None);
    }

    #[test]
    fn test_stratified_parse() {
        assert_eq!(
            PerformMetric::parse("accuracy_LCE_Unacceptable"),
            Some(PerformMetric::Stratified {
                dimension: Dimension::Lce,
                category: Category::Unacceptable,
            })
        );
    }
}
