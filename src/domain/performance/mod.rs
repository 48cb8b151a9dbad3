// Performance aggregation domain
pub mod metric_value;
pub mod metrics;
pub mod performance_evaluator;

pub use metric_value::MetricValue;
pub use metrics::{PerformMetric, default_perform_metrics};
pub use performance_evaluator::PerformanceEvaluator;
