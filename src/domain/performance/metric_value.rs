use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire token for a metric whose stratum was empty.
pub const UNAVAILABLE_TOKEN: &str = "None";

/// Value of one performance metric.
///
/// `Unavailable` marks an empty stratum and is distinct from a zero ratio.
/// On the wire it is the string `"None"`, which existing consumers expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Value(f64),
    Unavailable,
}

impl MetricValue {
    /// `numerator / denominator`, or `Unavailable` when the denominator is zero.
    pub fn ratio(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            MetricValue::Unavailable
        } else {
            MetricValue::Value(numerator as f64 / denominator as f64)
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(*v),
            MetricValue::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, MetricValue::Unavailable)
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Value(0.0)
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Value(v) => write!(f, "{:.4}", v),
            MetricValue::Unavailable => write!(f, "{}", UNAVAILABLE_TOKEN),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Value(v) => serializer.serialize_f64(*v),
            MetricValue::Unavailable => serializer.serialize_str(UNAVAILABLE_TOKEN),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMetricValue {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawMetricValue::deserialize(deserializer)? {
            RawMetricValue::Number(v) => Ok(MetricValue::Value(v)),
            RawMetricValue::Text(s) if s == UNAVAILABLE_TOKEN => Ok(MetricValue::Unavailable),
            RawMetricValue::Text(s) => Err(serde::de::Error::custom(format!(
                "invalid metric value `{}`, expected a number or \"{}\"",
                s, UNAVAILABLE_TOKEN
            ))),
        }
    }
}
