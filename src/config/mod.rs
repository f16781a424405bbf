//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the server starts with no configuration at all. `Config::from_env`
//! validates numeric and URL values up front so a typo fails at startup
//! instead of on the first request.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use url::Url;

/// Environment variable names.
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_WORKERS: &str = "WORKERS";
pub const ENV_UPSTREAM_BASE_URL: &str = "UPSTREAM_BASE_URL";
pub const ENV_UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_WORKERS: usize = 4;
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://store.steampowered.com";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    host: String,
    port: u16,
    workers: usize,
    upstream_base_url: Url,
    upstream_timeout: Duration,
    log_format: LogFormat,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_var(ENV_PORT, "port", DEFAULT_PORT)?;

        let workers = parse_var(ENV_WORKERS, "workers", DEFAULT_WORKERS)?;
        if workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workers",
                reason: "must be at least 1".to_string(),
            });
        }

        let upstream_base_url = match env::var(ENV_UPSTREAM_BASE_URL) {
            Ok(raw) => Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
                field: "upstream_base_url",
                reason: e.to_string(),
            })?,
            Err(_) => default_upstream_base_url(),
        };

        let timeout_secs = parse_var(
            ENV_UPSTREAM_TIMEOUT_SECS,
            "upstream_timeout_secs",
            DEFAULT_UPSTREAM_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upstream_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }

        let log_format = parse_var(ENV_LOG_FORMAT, "log_format", LogFormat::default())?;

        Ok(Self {
            host,
            port,
            workers,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            log_format,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
    /// Number of runtime worker threads serving requests.
    pub fn workers(&self) -> usize {
        self.workers
    }
    /// Root of the storefront all page URLs are built from.
    pub fn upstream_base_url(&self) -> &Url {
        &self.upstream_base_url
    }
    /// Upper bound on a single upstream request, including the body.
    pub fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            upstream_base_url: default_upstream_base_url(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            log_format: LogFormat::default(),
        }
    }
}

fn default_upstream_base_url() -> Url {
    Url::parse(DEFAULT_UPSTREAM_BASE_URL).expect("default upstream url is valid")
}

fn parse_var<T>(key: &str, field: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                field,
                reason: format!("'{raw}': {e}"),
            }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
