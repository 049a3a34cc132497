//! Configuration error types.

use thiserror::Error;

use super::ErrorCategory;

/// Errors raised while loading [`crate::config::AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("missing required setting {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::Missing { var } => format!("{} is not set.", var),
            ConfigError::Invalid { var, value, .. } => {
                format!("{} has an invalid value: {}", var, value)
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Missing { .. } => "CONFIG_MISSING",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_message() {
        let err = ConfigError::Missing {
            var: "MARKETX_API_URL",
        };
        assert_eq!(err.to_string(), "missing required setting MARKETX_API_URL");
        assert_eq!(err.user_message(), "MARKETX_API_URL is not set.");
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err = ConfigError::Invalid {
            var: "MARKETX_MAX_PENDING_BYTES",
            value: "lots".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("\"lots\""));
        assert_eq!(err.error_code(), "CONFIG_INVALID");
    }
}
