//! Logging configuration parsing from environment variables.
//!
//! Level filtering stays with `RUST_LOG`; this only selects the output format.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => anyhow::bail!("Invalid LOG_FORMAT: {}. Must be 'pretty' or 'compact'", s),
        }
    }
}

/// Logging environment configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingEnvConfig {
    pub format: LogFormat,
    pub with_target: bool,
}

impl LoggingEnvConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let format = match lookup("LOG_FORMAT") {
            Some(raw) => LogFormat::from_str(&raw)?,
            None => LogFormat::default(),
        };
        let with_target = lookup("LOG_WITH_TARGET")
            .and_then(|raw| raw.parse::<bool>().ok())
            .unwrap_or(false);

        Ok(Self {
            format,
            with_target,
        })
    }
}
