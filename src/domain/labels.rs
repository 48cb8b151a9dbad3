use crate::domain::errors::PredictorError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Labeling dimension evaluated on every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "PE")]
    Pe,
    #[serde(rename = "KE")]
    Ke,
    #[serde(rename = "LCE")]
    Lce,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Pe, Dimension::Ke, Dimension::Lce];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Pe => "PE",
            Dimension::Ke => "KE",
            Dimension::Lce => "LCE",
        }
    }
}

impl std::str::FromStr for Dimension {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PE" => Ok(Dimension::Pe),
            "KE" => Ok(Dimension::Ke),
            "LCE" => Ok(Dimension::Lce),
            _ => Err(PredictorError::UnknownDimension {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorical value a label can take in any dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Acceptable,
    Unacceptable,
    Insufficient,
    NotFound,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Acceptable,
        Category::Unacceptable,
        Category::Insufficient,
        Category::NotFound,
    ];

    /// Value as stored in an entry's `label` field.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Acceptable => "Acceptable",
            Category::Unacceptable => "Unacceptable",
            Category::Insufficient => "Insufficient",
            Category::NotFound => "Not Found",
        }
    }

    /// Spelling used inside metric names (`accuracy_PE_NotFound`).
    pub fn metric_suffix(&self) -> &'static str {
        match self {
            Category::NotFound => "NotFound",
            other => other.label(),
        }
    }

    pub fn from_metric_suffix(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.metric_suffix() == s)
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

/// Kind of entry stored on an instance: a prediction or the ground truth, per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Prediction(Dimension),
    GroundTruth(Dimension),
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Prediction(Dimension::Pe) => "prediction_PE",
            EntryKind::Prediction(Dimension::Ke) => "prediction_KE",
            EntryKind::Prediction(Dimension::Lce) => "prediction_LCE",
            EntryKind::GroundTruth(Dimension::Pe) => "groundtruth_PE",
            EntryKind::GroundTruth(Dimension::Ke) => "groundtruth_KE",
            EntryKind::GroundTruth(Dimension::Lce) => "groundtruth_LCE",
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PredictorError::UnknownEntryKind {
            kind: s.to_string(),
        };
        let (prefix, dimension) = s.split_once('_').ok_or_else(unknown)?;
        let dimension: Dimension = dimension.parse().map_err(|_| unknown())?;
        match prefix {
            "prediction" => Ok(EntryKind::Prediction(dimension)),
            "groundtruth" => Ok(EntryKind::GroundTruth(dimension)),
            _ => Err(unknown()),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A categorical label with its per-instance performance scores.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Label {
    pub label: String,
    #[serde(default)]
    pub perform: HashMap<String, f64>,
}

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            perform: HashMap::new(),
        }
    }

    pub fn with_score(mut self, metric: impl Into<String>, score: f64) -> Self {
        self.perform.insert(metric.into(), score);
        self
    }

    pub fn score(&self, metric: &str) -> Option<f64> {
        self.perform.get(metric).copied()
    }
}

/// A named model input handed to `model_predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub text: String,
}

impl Target {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_parsing() {
        for dimension in Dimension::ALL {
            for kind in [EntryKind::Prediction(dimension), EntryKind::GroundTruth(dimension)] {
                assert_eq!(kind.as_str().parse::<EntryKind>().unwrap(), kind);
            }
        }

        assert!("prediction_XE".parse::<EntryKind>().is_err());
        assert!("truth_PE".parse::<EntryKind>().is_err());
        assert!("prediction".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_not_found_spellings() {
        assert_eq!(Category::NotFound.label(), "Not Found");
        assert_eq!(Category::NotFound.metric_suffix(), "NotFound");
        assert_eq!(Category::from_label("Not Found"), Some(Category::NotFound));
        assert_eq!(Category::from_label("NotFound"), None);
        assert_eq!(
            Category::from_metric_suffix("NotFound"),
            Some(Category::NotFound)
        );
    }

    #[test]
    fn test_label_scores() {
        let label = Label::new("Acceptable").with_score("accuracy", 1.0);
        assert_eq!(label.score("accuracy"), Some(1.0));
        assert_eq!(label.score("f1"), None);
    }
}
