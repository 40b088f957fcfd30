//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! response headers, logging defaults, and default paths. `AppConfig` is the
//! root configuration struct containing all settings.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Results are computed per request and must not be stored by caches
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pairsum=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Accepted log formats
const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Request size limits
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for open connections during graceful shutdown
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl HttpServerConfig {
    fn default_shutdown_timeout() -> u64 {
        30
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes (default: 2 MiB)
    #[serde(default = "LimitsConfig::default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Maximum length of the `numbers` array; unbounded when unset
    pub max_numbers: Option<usize>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: Self::default_max_body_bytes(),
            max_numbers: None,
        }
    }
}

impl LimitsConfig {
    fn default_max_body_bytes() -> usize {
        2 * 1024 * 1024
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_body_bytes == 0 {
            return Err(ConfigError::Validation(
                "limits.max_body_bytes must be greater than zero".to_string(),
            ));
        }
        if self.limits.max_numbers == Some(0) {
            return Err(ConfigError::Validation(
                "limits.max_numbers must be greater than zero".to_string(),
            ));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}' (expected \"text\" or \"json\")",
                self.logging.format
            )));
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
[http]
host = "127.0.0.1"
port = 8080
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::parse(MINIMAL).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.shutdown_timeout_seconds, 30);
        assert_eq!(config.limits.max_body_bytes, 2 * 1024 * 1024);
        assert_eq!(config.limits.max_numbers, None);
        assert_eq!(config.logging.format, "text");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::parse(
            r#"
[http]
host = "0.0.0.0"
port = 9000
shutdown_timeout_seconds = 5

[limits]
max_body_bytes = 1024
max_numbers = 10

[logging]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.shutdown_timeout_seconds, 5);
        assert_eq!(config.limits.max_body_bytes, 1024);
        assert_eq!(config.limits.max_numbers, Some(10));
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_missing_http_section_is_parse_error() {
        let err = AppConfig::parse("[logging]\nformat = \"text\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let err = AppConfig::parse(&format!("{}\n[limits]\nmax_body_bytes = 0\n", MINIMAL))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = AppConfig::parse(&format!("{}\n[limits]\nmax_numbers = 0\n", MINIMAL))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::parse(&format!("{}\n[logging]\nformat = \"xml\"\n", MINIMAL))
            .unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
