//! Subcommand implementations

pub mod property;
pub mod reservations;
pub mod search;
pub mod user;

use anyhow::{Context, Result};
use lightbnb_db::config::LightbnbConfig;
use lightbnb_db::db::{create_pool_from_config, PgPool};
use lightbnb_db::Limit;
use serde::Serialize;

/// Settings resolved from flags, environment, and config files
pub struct CommandContext {
    config: LightbnbConfig,
    database_url: String,
}

impl CommandContext {
    pub fn new(config: LightbnbConfig, database_url: String) -> Self {
        Self {
            config,
            database_url,
        }
    }

    /// Connect lazily so commands that fail validation never touch the network.
    pub async fn connect(&self) -> Result<PgPool> {
        create_pool_from_config(&self.database_url, &self.config.database)
            .await
            .context("Failed to connect to database")
    }

    /// `--limit` if given, otherwise `[search] default_limit`.
    pub fn limit(&self, requested: Option<u32>) -> Result<Limit> {
        match requested {
            Some(n) => Ok(Limit::new(n)?),
            None => Ok(self.config.default_limit()?),
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
