// Built-in predictor variants registered by `PredictorRegistry::with_builtin`
pub mod constant;
pub mod precomputed;

pub use constant::ConstantPredictor;
pub use precomputed::PrecomputedPredictor;
