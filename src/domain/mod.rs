// Labels, entry kinds and targets
pub mod labels;

// Instance store abstraction
pub mod instance;

// Performance aggregation domain
pub mod performance;

// Predictor identity and model capability
pub mod predictor;

// Domain-specific error types
pub mod errors;
