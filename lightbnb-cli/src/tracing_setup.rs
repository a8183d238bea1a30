//! Console logging for `lightbnb`
//!
//! Everything is written to stderr; stdout carries only the JSON result.
//! `RUST_LOG` (from the shell or `.env`) picks the filter. Without it the
//! level is `info`, or `debug` under `--debug`, which also logs each SQL
//! statement and its parameters.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// `--debug` was passed
    pub debug: bool,
}

impl TracingConfig {
    fn fallback_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.fallback_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
