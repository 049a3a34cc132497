//! Analysis session error types.
//!
//! Every variant is terminal to the session it occurs in. Recoverable frame
//! decode failures never reach this type.

use serde::Deserialize;
use thiserror::Error;

use super::{ErrorCategory, StreamError};
use crate::traits::HttpError;

/// Message shown when the upstream rate limit is hit (HTTP 429).
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait a moment and try again.";

/// Message shown when the usage allowance is exhausted (HTTP 402).
pub const QUOTA_MESSAGE: &str = "Usage limit reached. Please add credits to continue.";

/// Fallback for non-2xx responses without a usable `error` field.
pub const DEFAULT_SERVER_MESSAGE: &str = "Failed to analyze stock";

/// Message for a success response that carries no readable body.
pub const NO_BODY_MESSAGE: &str = "No response body";

/// Fallback when an error renders to an empty string.
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Best-effort extraction of the `error` field from a JSON error body.
pub(crate) fn error_field(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
}

/// Terminal errors of a streaming analysis session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Upstream answered 429.
    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited { detail: Option<String> },

    /// Upstream answered 402.
    #[error("Usage limit reached. Please add credits to continue.")]
    QuotaExceeded { detail: Option<String> },

    /// Any other non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xx without a readable body.
    #[error("No response body")]
    NoResponseBody,

    /// The request could not be sent or the connection dropped.
    #[error("{0}")]
    Transport(HttpError),

    /// The body violated the stream contract while being read.
    #[error(transparent)]
    Stream(#[from] StreamError),
}

impl AnalysisError {
    /// Map a transport error raised while opening the stream.
    pub fn from_http(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => {
                let detail = error_field(&message);
                match status {
                    429 => AnalysisError::RateLimited { detail },
                    402 => AnalysisError::QuotaExceeded { detail },
                    _ => AnalysisError::Server {
                        status,
                        message: detail.unwrap_or_else(|| DEFAULT_SERVER_MESSAGE.to_string()),
                    },
                }
            }
            HttpError::EmptyBody => AnalysisError::NoResponseBody,
            other => AnalysisError::Transport(other),
        }
    }

    /// Text for the inline error panel.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Stream(e) => e.user_message(),
            other => {
                let text = other.to_string();
                if text.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    text
                }
            }
        }
    }

    /// Text for the transient notification raised alongside the panel.
    pub fn notification_message(&self) -> String {
        self.user_message()
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::RateLimited { .. } => ErrorCategory::RateLimit,
            AnalysisError::QuotaExceeded { .. } => ErrorCategory::Quota,
            AnalysisError::Server { .. } => ErrorCategory::Server,
            AnalysisError::NoResponseBody => ErrorCategory::Protocol,
            AnalysisError::Transport(_) => ErrorCategory::Network,
            AnalysisError::Stream(StreamError::BufferOverflow { .. }) => ErrorCategory::Protocol,
            AnalysisError::Stream(StreamError::ReadFailed { .. }) => ErrorCategory::Network,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::RateLimited { .. } => "ANALYSIS_RATE_LIMITED",
            AnalysisError::QuotaExceeded { .. } => "ANALYSIS_QUOTA_EXCEEDED",
            AnalysisError::Server { .. } => "ANALYSIS_SERVER_ERROR",
            AnalysisError::NoResponseBody => "ANALYSIS_NO_BODY",
            AnalysisError::Transport(_) => "ANALYSIS_TRANSPORT",
            AnalysisError::Stream(e) => e.error_code(),
        }
    }
}
