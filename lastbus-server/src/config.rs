//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::schedules::{HttpSourceConfig, LoaderConfig};

/// Errors from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something unusable
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration parameters for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory holding `stands.json`, `languages.json` and, unless a
    /// schedule URL is set, the per-stand datasets.
    pub data_dir: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Fetch per-stand datasets from this base URL instead of `data_dir`.
    pub schedule_url: Option<String>,

    /// How long a loaded dataset stays cached (seconds).
    pub cache_ttl_secs: u64,

    /// Maximum number of cached datasets.
    pub cache_capacity: u64,

    /// Timeout for dataset HTTP requests (seconds).
    pub http_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            schedule_url: None,
            cache_ttl_secs: 60 * 60,
            cache_capacity: 256,
            http_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from `LASTBUS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            addr: parse_var(var("LASTBUS_ADDR"), "LASTBUS_ADDR", defaults.addr)?,
            data_dir: var("LASTBUS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            static_dir: var("LASTBUS_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            schedule_url: var("LASTBUS_SCHEDULE_URL"),
            cache_ttl_secs: parse_var(
                var("LASTBUS_CACHE_TTL_SECS"),
                "LASTBUS_CACHE_TTL_SECS",
                defaults.cache_ttl_secs,
            )?,
            cache_capacity: parse_var(
                var("LASTBUS_CACHE_CAPACITY"),
                "LASTBUS_CACHE_CAPACITY",
                defaults.cache_capacity,
            )?,
            http_timeout_secs: parse_var(
                var("LASTBUS_HTTP_TIMEOUT_SECS"),
                "LASTBUS_HTTP_TIMEOUT_SECS",
                defaults.http_timeout_secs,
            )?,
        })
    }

    /// Set a custom data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Fetch datasets over HTTP from the given base URL.
    pub fn with_schedule_url(mut self, url: impl Into<String>) -> Self {
        self.schedule_url = Some(url.into());
        self
    }

    /// Path of the stand catalog.
    pub fn stands_path(&self) -> PathBuf {
        self.data_dir.join("stands.json")
    }

    /// Path of the language packs.
    pub fn languages_path(&self) -> PathBuf {
        self.data_dir.join("languages.json")
    }

    /// Directory of per-stand datasets when reading from disk.
    pub fn datasets_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Cache settings for the schedule loader.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            ttl: Duration::from_secs(self.cache_ttl_secs),
            max_capacity: self.cache_capacity,
        }
    }

    /// HTTP source settings, if datasets are fetched remotely.
    pub fn http_source_config(&self) -> Option<HttpSourceConfig> {
        self.schedule_url
            .as_ref()
            .map(|url| HttpSourceConfig::new(url.clone()).with_timeout_secs(self.http_timeout_secs))
    }
}

fn parse_var<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
