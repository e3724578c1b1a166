//! Configuration loading and constants.
//!
//! Loads the HTTP binding and logging settings from an optional TOML file,
//! then applies environment overrides. `AppConfig` is the root configuration
//! struct; every field has a built-in default so the service starts with no
//! configuration at all.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// =============================================================================
// Health Payload
// =============================================================================

/// Value of the `status` field in every health response
pub const HEALTH_STATUS_OK: &str = "ok";

/// Value of the `message` field in every health response
pub const HEALTH_MESSAGE: &str = "Reading Assessment Dashboard backend placeholder";

/// Value of the `details` field in every health response
// Earlier backend said "this Flask app"; clients only rely on the field shape.
pub const HEALTH_DETAILS: &str =
    "React frontend talks directly to Supabase; this service just exposes a health endpoint.";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Liveness answers must never be served from an intermediate cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Server Defaults
// =============================================================================

/// Listen on all interfaces by default
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_HTTP_PORT: u16 = 6967;

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path, used only if present
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "reading_backend=info,tower_http=info";

/// Default log format
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

/// Environment variable overriding `http.host`
pub const ENV_HTTP_HOST: &str = "READING_BACKEND_HOST";

/// Environment variable overriding `http.port`
pub const ENV_HTTP_PORT: &str = "READING_BACKEND_PORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    /// Socket address the server binds to.
    ///
    /// The host is an IP literal; IPv6 may be written bare (`::`) or
    /// bracketed (`[::]`).
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        let ip: IpAddr = host.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid http.host '{}': {}", self.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        DEFAULT_LOG_FORMAT
    }
}

impl AppConfig {
    /// Parse configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.http.socket_addr()?;
        Ok(config)
    }

    /// Resolve configuration for process startup.
    ///
    /// An explicit path must be readable. Without one, `DEFAULT_CONFIG_PATH`
    /// is used if it exists and built-in defaults otherwise. Environment
    /// overrides are applied last.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve_from(explicit, Path::new(DEFAULT_CONFIG_PATH), |key| {
            std::env::var(key).ok()
        })
    }

    fn resolve_from<F>(
        explicit: Option<&str>,
        default_path: &Path,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None if default_path.exists() => Self::load(default_path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Apply host/port overrides from a variable lookup (the process
    /// environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HTTP_HOST) {
            self.http.host = host;
        }
        if let Some(port) = lookup(ENV_HTTP_PORT) {
            self.http.port = port.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} must be a port number, got '{}'", ENV_HTTP_PORT, port))
            })?;
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
