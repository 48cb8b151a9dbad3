pub mod instance_repository;
pub mod logging;
pub mod predictor_records;
pub mod report_persistence;

pub use instance_repository::JsonInstanceRepository;
pub use predictor_records::load_predictor_records;
pub use report_persistence::ReportPersistence;
