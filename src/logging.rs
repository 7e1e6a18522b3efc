//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("tidewatch={}", config.level)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.format == "json" {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };

    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
