//! Mock implementations for testing.
//!
//! Enables exercising the streaming pipeline without network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and chunked streams

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
