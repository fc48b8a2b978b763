//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Default cap on downloaded image bodies (50 MiB).
pub const DEFAULT_MAX_DOWNLOAD_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("fetch timeout must be at least one second")]
    ZeroFetchTimeout,

    #[error("maximum download size must be non-zero")]
    ZeroDownloadLimit,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "imagers-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "IMAGERS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "IMAGERS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Timeout for downloading a source image, in seconds
    #[arg(long, env = "IMAGERS_FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Largest source image body accepted, in bytes
    #[arg(long, env = "IMAGERS_MAX_DOWNLOAD_BYTES", default_value_t = DEFAULT_MAX_DOWNLOAD_BYTES)]
    pub max_download_bytes: u64,

    /// Emit logs as JSON lines
    #[arg(long, env = "IMAGERS_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::ZeroFetchTimeout);
        }
        if self.max_download_bytes == 0 {
            return Err(ConfigError::ZeroDownloadLimit);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            fetch_timeout_secs: 30,
            max_download_bytes: DEFAULT_MAX_DOWNLOAD_BYTES,
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "imagers-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--fetch-timeout-secs",
            "5",
            "--max-download-bytes",
            "1024",
            "--log-json",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
        assert_eq!(config.max_download_bytes, 1024);
        assert!(config.log_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.max_download_bytes, 52_428_800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.fetch_timeout_secs = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFetchTimeout));
    }

    #[test]
    fn test_validate_rejects_zero_download_limit() {
        let mut config = Config::default();
        config.max_download_bytes = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDownloadLimit));
    }

    #[test]
    fn test_rejects_non_numeric_port() {
        assert!(Config::try_parse_from(["imagers-server", "--port", "http"]).is_err());
    }
}
