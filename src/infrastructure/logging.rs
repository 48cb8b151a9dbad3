use crate::config::{LogFormat, LoggingEnvConfig};
use tracing::Level;
use tracing_subscriber::prelude::*;

/// Install the global subscriber: `RUST_LOG` filtering on top of an INFO default.
pub fn init_tracing(config: &LoggingEnvConfig) {
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(config.with_target);

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
    }
}
