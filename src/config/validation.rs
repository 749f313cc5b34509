//! Configuration validation logic
//!
//! Every section validates itself; [`Settings::validate`] runs them in order
//! and reports the first failure.

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LoggerSettings, ServerConfig, Settings, UpstreamConfig};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Valid rotation strategies
const VALID_ROTATION_STRATEGIES: &[&str] = &[
    "size",
    "time",
    "time_hourly",
    "time_daily",
    "time_weekly",
    "time_monthly",
    "hourly",
    "daily",
    "weekly",
    "monthly",
    "count",
    "combined",
];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host must not be empty.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl UpstreamConfig {
    /// Validate upstream configuration
    ///
    /// # Validation Rules
    /// - Base URL must use the http or https scheme
    /// - Every dataset path must start with `/`
    /// - Both timeouts must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::ValidationError {
                field: "upstream.base_url".to_string(),
                message: format!(
                    "Invalid upstream URL '{}'. Expected format: http(s)://host[:port][/prefix]",
                    self.base_url
                ),
            });
        }

        for (field, path) in [
            ("upstream.topics_path", &self.topics_path),
            ("upstream.covid_world_path", &self.covid_world_path),
            ("upstream.covid_barcelona_path", &self.covid_barcelona_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError {
                    field: field.to_string(),
                    message: format!("Path '{}' must start with '/'.", path),
                });
            }
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "upstream.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "upstream.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        if !VALID_ROTATION_STRATEGIES.contains(&self.rotation.strategy.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.rotation.strategy".to_string(),
                message: format!(
                    "Invalid rotation strategy '{}'. Valid strategies are: size, time, hourly, daily, weekly, monthly, count, combined",
                    self.rotation.strategy
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one of console or file output must be enabled
    /// - File settings must be consistent (see [`FileSettings`])
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name must not be empty.",
            ));
        }

        self.server.validate()?;
        self.upstream.validate()?;
        self.logger.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_server_port_zero() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert_eq!(field_of(settings.validate().unwrap_err()), "server.port");
    }

    #[test]
    fn test_server_empty_host() {
        let mut settings = Settings::default();
        settings.server.host = "  ".to_string();
        assert_eq!(field_of(settings.validate().unwrap_err()), "server.host");
    }

    #[test]
    fn test_upstream_url_scheme() {
        let mut upstream = UpstreamConfig::default();
        for bad in ["", "ftp://host", "localhost:5000", "http://"] {
            upstream.base_url = bad.to_string();
            assert_eq!(field_of(upstream.validate().unwrap_err()), "upstream.base_url", "{bad}");
        }
        upstream.base_url = "https://soa.example.org/api/".to_string();
        assert!(upstream.validate().is_ok());
    }

    #[test]
    fn test_upstream_paths_need_leading_slash() {
        let upstream = UpstreamConfig {
            covid_barcelona_path: "covid/barcelona".to_string(),
            ..UpstreamConfig::default()
        };
        assert_eq!(
            field_of(upstream.validate().unwrap_err()),
            "upstream.covid_barcelona_path"
        );
    }

    #[test]
    fn test_upstream_timeouts() {
        let upstream = UpstreamConfig {
            connect_timeout: 0,
            ..UpstreamConfig::default()
        };
        assert_eq!(field_of(upstream.validate().unwrap_err()), "upstream.connect_timeout");
    }

    #[test]
    fn test_logger_level_and_outputs() {
        let mut logger = LoggerSettings::default();
        logger.level = "verbose".to_string();
        assert_eq!(field_of(logger.validate().unwrap_err()), "logger.level");

        logger.level = "WARN".to_string();
        assert!(logger.validate().is_ok());

        logger.console.enabled = false;
        assert_eq!(field_of(logger.validate().unwrap_err()), "logger");
    }

    #[test]
    fn test_logger_file_rules() {
        let mut logger = LoggerSettings::default();
        logger.file.enabled = true;
        logger.file.path = String::new();
        assert_eq!(field_of(logger.validate().unwrap_err()), "logger.file.path");

        logger.file.path = "logs/app.log".to_string();
        logger.file.rotation.strategy = "fortnightly".to_string();
        assert_eq!(
            field_of(logger.validate().unwrap_err()),
            "logger.file.rotation.strategy"
        );

        logger.file.rotation.strategy = "hourly".to_string();
        assert!(logger.validate().is_ok());
    }
}
