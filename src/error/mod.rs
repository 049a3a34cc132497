//! Error handling for marketx.
//!
//! This module provides:
//!
//! - **Error Categories**: High-level classification for presentation decisions
//! - **Domain-specific Errors**: Stream, Analysis, Quote and Config errors
//!
//! Every error type exposes `user_message()`, `error_code()` and `category()`.
//!
//! # Example
//!
//! ```ignore
//! use marketx::error::AnalysisError;
//!
//! match outcome {
//!     Err(err) => {
//!         eprintln!("Error: {}", err.user_message());
//!         if err.category().has_dedicated_notice() {
//!             notify(&err.notification_message());
//!         }
//!     }
//!     Ok(text) => println!("{}", text),
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Description | Dedicated notice |
//! |----------|-------------|------------------|
//! | Network | Connection, timeout, dropped body | No |
//! | RateLimit | HTTP 429 | Yes |
//! | Quota | HTTP 402 | Yes |
//! | Server | Other non-2xx | No |
//! | Protocol | Missing body, runaway line | No |
//! | User | Bad symbol | No |
//! | Configuration | Environment issues | No |

mod analysis;
mod category;
mod config;
mod quote;
mod stream;

// Re-export all public types
pub use analysis::{
    AnalysisError, DEFAULT_SERVER_MESSAGE, GENERIC_FAILURE_MESSAGE, NO_BODY_MESSAGE, QUOTA_MESSAGE,
    RATE_LIMIT_MESSAGE,
};
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use quote::{QuoteError, DEFAULT_QUOTE_MESSAGE};
pub use stream::StreamError;
