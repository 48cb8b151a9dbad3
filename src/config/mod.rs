//! Configuration module for erranalyst.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Evaluation and Logging.

mod evaluation_config;
mod logging_config;

pub use evaluation_config::EvaluationEnvConfig;
pub use logging_config::{LogFormat, LoggingEnvConfig};

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub evaluation: EvaluationEnvConfig,
    pub logging: LoggingEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let evaluation =
            EvaluationEnvConfig::from_env().context("Failed to load evaluation config")?;
        let logging = LoggingEnvConfig::from_env().context("Failed to load logging config")?;

        Ok(Self {
            evaluation,
            logging,
        })
    }
}
