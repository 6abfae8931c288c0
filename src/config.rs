//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables. The cache parameters (TTL, bound, eviction margin) are fixed
//! constants in the cache module, not configuration.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream billing service
    pub upstream_url: String,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `UPSTREAM_URL` - Upstream billing service base URL
    ///   (default: http://localhost:4000)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            upstream_url: "http://localhost:4000".to_string(),
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.upstream_url, "http://localhost:4000");
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("UPSTREAM_URL");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.upstream_url, "http://localhost:4000");
        assert_eq!(config.cleanup_interval, 60);
    }
}
