//! Quote lookup error types.

use thiserror::Error;

use super::analysis::error_field;
use super::ErrorCategory;
use crate::traits::HttpError;

/// Fallback for failed quote lookups without a usable `error` field.
pub const DEFAULT_QUOTE_MESSAGE: &str = "Failed to fetch stock data";

/// Errors from the quote collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// The symbol was blank after trimming.
    #[error("Please enter a stock symbol")]
    EmptySymbol,

    /// The service answered 2xx but reported an error in the body.
    #[error("{0}")]
    Rejected(String),

    /// Non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The 2xx body did not match the quote shape.
    #[error("Unexpected quote response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Transport(#[from] HttpError),
}

impl QuoteError {
    /// Build a `Server` error from a non-2xx status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        QuoteError::Server {
            status,
            message: error_field(body).unwrap_or_else(|| DEFAULT_QUOTE_MESSAGE.to_string()),
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::EmptySymbol | QuoteError::Rejected(_) => ErrorCategory::User,
            QuoteError::Server { status: 429, .. } => ErrorCategory::RateLimit,
            QuoteError::Server { .. } => ErrorCategory::Server,
            QuoteError::InvalidResponse(_) => ErrorCategory::Protocol,
            QuoteError::Transport(_) => ErrorCategory::Network,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::EmptySymbol => "QUOTE_EMPTY_SYMBOL",
            QuoteError::Rejected(_) => "QUOTE_REJECTED",
            QuoteError::Server { .. } => "QUOTE_SERVER_ERROR",
            QuoteError::InvalidResponse(_) => "QUOTE_INVALID_RESPONSE",
            QuoteError::Transport(_) => "QUOTE_TRANSPORT",
        }
    }
}
