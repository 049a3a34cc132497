//! Error category classification.
//!
//! Categories drive how a failed lookup is presented: which errors raise a
//! dedicated notification and what hint accompanies the message.

use std::fmt;

/// High-level categorization of errors for presentation decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or read failures on the transport.
    Network,

    /// Upstream rejected the request because of request rate (HTTP 429).
    RateLimit,

    /// Upstream usage allowance is exhausted (HTTP 402).
    Quota,

    /// Any other non-2xx response from upstream.
    Server,

    /// The response body violated the stream contract (missing body, runaway line).
    Protocol,

    /// Invalid user input, e.g. an empty or unknown symbol.
    User,

    /// Missing or malformed configuration.
    Configuration,
}

impl ErrorCategory {
    /// Whether errors in this category raise their own transient notification
    /// on top of the inline error panel.
    pub fn has_dedicated_notice(&self) -> bool {
        matches!(self, ErrorCategory::RateLimit | ErrorCategory::Quota)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::Quota => "quota",
            ErrorCategory::Server => "server",
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and look the symbol up again",
            ErrorCategory::RateLimit => "Wait a moment before starting another lookup",
            ErrorCategory::Quota => "Add credits to the analysis workspace",
            ErrorCategory::Server => "The service may be having issues. Please try again later",
            ErrorCategory::Protocol => "The analysis service sent an unexpected response",
            ErrorCategory::User => "Please check the symbol and try again",
            ErrorCategory::Configuration => "Check the MARKETX_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedicated_notice() {
        assert!(ErrorCategory::RateLimit.has_dedicated_notice());
        assert!(ErrorCategory::Quota.has_dedicated_notice());
        assert!(!ErrorCategory::Server.has_dedicated_notice());
        assert!(!ErrorCategory::Network.has_dedicated_notice());
        assert!(!ErrorCategory::Protocol.has_dedicated_notice());
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Network.as_str(), "network");
        assert_eq!(ErrorCategory::RateLimit.as_str(), "rate_limit");
        assert_eq!(ErrorCategory::Quota.as_str(), "quota");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Server), "server");
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Network.recovery_hint().contains("internet"));
        assert!(ErrorCategory::Configuration.recovery_hint().contains("MARKETX_"));
    }
}
