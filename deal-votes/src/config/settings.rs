use std::env;
use std::time::Duration;

use tracing::warn;

/// Default base URL of the deals API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default location of the local vote store.
pub const DEFAULT_STORE_URL: &str = "sqlite://deal-votes.db";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where vote deltas are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiTarget {
    /// In-process endpoint, no network.
    Mock,
    /// Deals API at the given base URL.
    Live(String),
}

/// Where the client's own vote records are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// Records are lost when the process exits.
    Memory,
    /// SQLite database at the given URL.
    Sqlite(String),
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiTarget,
    pub store: StoreTarget,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiTarget::Live(DEFAULT_API_URL.to_string()),
            store: StoreTarget::Sqlite(DEFAULT_STORE_URL.to_string()),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DEALS_API_URL`: base URL of the deals API, or `mock` (default: http://localhost:8000)
    /// - `VOTE_STORE_URL`: SQLite URL of the local vote store, or `memory` (default: sqlite://deal-votes.db)
    /// - `VOTE_REQUEST_TIMEOUT_SECS`: per-request timeout in seconds (default: 10)
    /// - `LOG_FORMAT`: `json` or `pretty` (default: pretty)
    ///
    /// Invalid values fall back to their default with a warning.
    pub fn from_env() -> Self {
        let api = match env::var("DEALS_API_URL") {
            Ok(url) if url.eq_ignore_ascii_case("mock") => ApiTarget::Mock,
            Ok(url) if !url.trim().is_empty() => ApiTarget::Live(url),
            _ => ApiTarget::Live(DEFAULT_API_URL.to_string()),
        };

        let store = match env::var("VOTE_STORE_URL") {
            Ok(url) if url.eq_ignore_ascii_case("memory") => StoreTarget::Memory,
            Ok(url) if !url.trim().is_empty() => StoreTarget::Sqlite(url),
            _ => StoreTarget::Sqlite(DEFAULT_STORE_URL.to_string()),
        };

        let request_timeout = match env::var("VOTE_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(value = %raw, "Invalid VOTE_REQUEST_TIMEOUT_SECS, defaulting to {}", DEFAULT_REQUEST_TIMEOUT_SECS);
                    DEFAULT_REQUEST_TIMEOUT_SECS
                }
            },
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Self {
            api,
            store,
            request_timeout: Duration::from_secs(request_timeout),
            log_format: LogFormat::from_env(),
        }
    }
}

impl LogFormat {
    /// Parses `LOG_FORMAT`. Defaults to `Pretty` if not set or invalid.
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => {
                warn!("Invalid LOG_FORMAT, defaulting to 'pretty'");
                Self::Pretty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "DEALS_API_URL",
        "VOTE_STORE_URL",
        "VOTE_REQUEST_TIMEOUT_SECS",
        "LOG_FORMAT",
    ];

    fn clear_env_vars() {
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env_vars();
        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    #[serial]
    fn test_reads_all_variables() {
        clear_env_vars();
        unsafe {
            env::set_var("DEALS_API_URL", "https://deals.example.com");
            env::set_var("VOTE_STORE_URL", "sqlite:///tmp/votes.db");
            env::set_var("VOTE_REQUEST_TIMEOUT_SECS", "3");
            env::set_var("LOG_FORMAT", "JSON");
        }

        let config = Config::from_env();
        clear_env_vars();

        assert_eq!(config.api, ApiTarget::Live("https://deals.example.com".to_string()));
        assert_eq!(config.store, StoreTarget::Sqlite("sqlite:///tmp/votes.db".to_string()));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn test_mock_and_memory_targets() {
        clear_env_vars();
        unsafe {
            env::set_var("DEALS_API_URL", "mock");
            env::set_var("VOTE_STORE_URL", "memory");
        }

        let config = Config::from_env();
        clear_env_vars();

        assert_eq!(config.api, ApiTarget::Mock);
        assert_eq!(config.store, StoreTarget::Memory);
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env_vars();
        unsafe {
            env::set_var("VOTE_REQUEST_TIMEOUT_SECS", "soon");
            env::set_var("LOG_FORMAT", "xml");
        }

        let config = Config::from_env();
        clear_env_vars();

        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn test_zero_timeout_falls_back() {
        clear_env_vars();
        unsafe {
            env::set_var("VOTE_REQUEST_TIMEOUT_SECS", "0");
        }

        let config = Config::from_env();
        clear_env_vars();

        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    }
}
