//! Streaming-related error types.
//!
//! Errors raised while consuming an analysis response body. Frame decode
//! failures are not represented here: they are recoverable and handled
//! inside the parser.

use thiserror::Error;

/// Stream-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The decode buffer grew past its configured cap without a newline.
    #[error("stream buffer exceeded {limit} bytes ({pending} pending)")]
    BufferOverflow { pending: usize, limit: usize },

    /// Reading the next chunk from the transport failed.
    #[error("stream read failed: {message}")]
    ReadFailed { message: String },
}

impl StreamError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::BufferOverflow { .. } => {
                "The analysis stream sent an oversized frame and was stopped.".to_string()
            }
            StreamError::ReadFailed { message } => {
                format!("Connection lost while streaming the analysis: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::BufferOverflow { .. } => "STREAM_BUFFER_OVERFLOW",
            StreamError::ReadFailed { .. } => "STREAM_READ_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StreamError::BufferOverflow {
            pending: 20,
            limit: 16,
        };
        assert_eq!(err.to_string(), "stream buffer exceeded 16 bytes (20 pending)");

        let err = StreamError::ReadFailed {
            message: "reset".to_string(),
        };
        assert_eq!(err.to_string(), "stream read failed: reset");
    }

    #[test]
    fn test_user_message_and_code() {
        let err = StreamError::ReadFailed {
            message: "reset by peer".to_string(),
        };
        assert!(err.user_message().contains("reset by peer"));
        assert_eq!(err.error_code(), "STREAM_READ_FAILED");
    }
}
