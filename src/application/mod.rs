// Built-in predictor variants
pub mod predictors;

// Predictor registry and record-based reconstruction
pub mod registry;
