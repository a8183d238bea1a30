//! Configuration: `.env` files, TOML config, and environment overrides
//!
//! Priority for the database URL (highest first):
//! 1. `DATABASE_URL` environment variable (including values from `.env`)
//! 2. `[database] url` in `./lightbnb.toml`
//! 3. `[database] url` in `~/.lightbnb/config.toml`
//! 4. `postgres://localhost/lightbnb`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::models::Limit;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/lightbnb";

/// Environment variable holding the connection string
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Load environment variables from .env files.
///
/// Checks the current directory first, then `~/.lightbnb/.env`. dotenvy never
/// overwrites variables that are already set, so earlier sources win.
/// Returns the files that were loaded.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|d| d.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => {
                    debug!("Loaded .env from {}", env_file.display());
                    loaded_from.push(env_file);
                }
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.lightbnb)");
    }

    loaded_from
}

/// The lightbnb config directory (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightbnbConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_limit() -> u32 {
    crate::models::limit::DEFAULT_LIMIT
}

/// One config file as written: every key optional so files can be stacked
#[derive(Debug, Default, Deserialize)]
struct ConfigLayer {
    #[serde(default)]
    database: DatabaseLayer,

    #[serde(default)]
    search: SearchLayer,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseLayer {
    url: Option<String>,
    max_connections: Option<u32>,
    acquire_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchLayer {
    default_limit: Option<u32>,
}

impl ConfigLayer {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl LightbnbConfig {
    /// Load from `~/.lightbnb/config.toml`, then `./lightbnb.toml` on top.
    ///
    /// Missing files are skipped. Unreadable or malformed files are errors.
    pub fn load() -> Result<Self, ConfigError> {
        let mut paths = Vec::new();
        if let Some(global) = config_dir().map(|d| d.join("config.toml")) {
            paths.push(global);
        }
        paths.push(PathBuf::from("lightbnb.toml"));
        Self::load_from(&paths)
    }

    /// Load each existing file in order.
    ///
    /// Keys set in a later file override the same keys from earlier files;
    /// keys it leaves out keep their earlier value.
    pub fn load_from(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for path in paths {
            if !path.exists() {
                continue;
            }
            let layer = ConfigLayer::read(path)?;
            info!("Loaded config from {}", path.display());
            config.apply(layer);
        }

        config.validate()?;
        Ok(config)
    }

    /// Config from a single file, with defaults for every key it omits.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply(ConfigLayer::read(path)?);
        Ok(config)
    }

    fn apply(&mut self, layer: ConfigLayer) {
        let database = layer.database;
        if database.url.is_some() {
            self.database.url = database.url;
        }
        if let Some(max_connections) = database.max_connections {
            self.database.max_connections = max_connections;
        }
        if let Some(secs) = database.acquire_timeout_secs {
            self.database.acquire_timeout_secs = secs;
        }
        if let Some(default_limit) = layer.search.default_limit {
            self.search.default_limit = default_limit;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::invalid("database.max_connections must be at least 1"));
        }
        if self.search.default_limit == 0 {
            return Err(ConfigError::invalid("search.default_limit must be at least 1"));
        }
        Ok(())
    }

    /// Connection string, with `DATABASE_URL` taking precedence over the file.
    pub fn database_url(&self) -> String {
        self.resolve_database_url(std::env::var(DATABASE_URL_ENV).ok().as_deref())
    }

    fn resolve_database_url(&self, env_url: Option<&str>) -> String {
        env_url
            .filter(|url| !url.is_empty())
            .map(str::to_owned)
            .or_else(|| self.database.url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }

    pub fn default_limit(&self) -> Result<Limit, ConfigError> {
        Limit::new(self.search.default_limit)
            .map_err(|e| ConfigError::invalid(format!("search.default_limit: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_toml(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn defaults_when_no_files() {
        let config = LightbnbConfig::load_from(&[PathBuf::from("/nonexistent/lightbnb.toml")])
            .unwrap();
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout(), Duration::from_secs(30));
        assert_eq!(config.default_limit().unwrap(), Limit::default());
        assert_eq!(config.resolve_database_url(None), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn later_file_overrides_earlier() {
        let global = write_toml(
            r#"
            [database]
            url = "postgres://global/lightbnb"
            max_connections = 8

            [search]
            default_limit = 25
            "#,
        );
        let local = write_toml(
            r#"
            [database]
            max_connections = 2
            "#,
        );

        let config =
            LightbnbConfig::load_from(&[global.path().to_path_buf(), local.path().to_path_buf()])
                .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("postgres://global/lightbnb"));
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.search.default_limit, 25);
    }

    #[test]
    fn keys_missing_from_local_file_keep_global_values() {
        let global = write_toml(
            r#"
            [database]
            max_connections = 8
            acquire_timeout_secs = 12

            [search]
            default_limit = 25
            "#,
        );
        let local = write_toml(
            r#"
            [database]
            url = "postgres://local/lightbnb"
            "#,
        );

        let config =
            LightbnbConfig::load_from(&[global.path().to_path_buf(), local.path().to_path_buf()])
                .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("postgres://local/lightbnb"));
        assert_eq!(config.database.max_connections, 8);
        assert_eq!(config.database.acquire_timeout(), Duration::from_secs(12));
        assert_eq!(config.search.default_limit, 25);
    }

    #[test]
    fn single_file_fills_defaults() {
        let file = write_toml("[search]\ndefault_limit = 4\n");
        let config = LightbnbConfig::from_path(file.path()).unwrap();

        assert_eq!(config.search.default_limit, 4);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.url, None);
    }

    #[test]
    fn env_url_wins_over_file() {
        let file = write_toml("[database]\nurl = \"postgres://file/lightbnb\"\n");
        let config = LightbnbConfig::load_from(&[file.path().to_path_buf()]).unwrap();

        assert_eq!(
            config.resolve_database_url(Some("postgres://env/lightbnb")),
            "postgres://env/lightbnb"
        );
        assert_eq!(config.resolve_database_url(Some("")), "postgres://file/lightbnb");
        assert_eq!(config.resolve_database_url(None), "postgres://file/lightbnb");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_toml("[database\nurl = ");
        let err = LightbnbConfig::load_from(&[file.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_limit_rejected() {
        let file = write_toml("[search]\ndefault_limit = 0\n");
        let err = LightbnbConfig::load_from(&[file.path().to_path_buf()]).unwrap_err();
        assert!(err.to_string().contains("default_limit"));
    }
}
