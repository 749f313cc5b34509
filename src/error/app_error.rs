use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// Variants carry enough context to log a useful message; the HTTP layer
/// decides how much of it reaches the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// No handler serves the requested resource
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Upstream service answered with a non-success status
    #[error("Upstream {service} responded with status {status}")]
    Upstream { service: String, status: u16 },

    /// Upstream service answered with a body that is not valid JSON
    #[error("Failed to decode {service} response")]
    Decode {
        service: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for wrapping an arbitrary message as an internal error.
    pub fn internal(message: impl std::fmt::Display) -> Self {
        AppError::Internal {
            source: anyhow::anyhow!("{}", message),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Internal {
            source: error.into(),
        }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        let key = match &error {
            crate::config::error::ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;

    #[test]
    fn test_upstream_display() {
        let error = AppError::Upstream {
            service: "topics".to_string(),
            status: 503,
        };
        assert_eq!(error.to_string(), "Upstream topics responded with status 503");
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let error: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(error, AppError::Internal { .. }));
    }

    #[test]
    fn test_from_config_error_keeps_field() {
        let error: AppError = ConfigError::validation("server.port", "bad").into();
        match error {
            AppError::Configuration { key, .. } => assert_eq!(key, "server.port"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }
}
