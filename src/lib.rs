//! marketx - terminal stock lookups with a streamed AI analysis
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod analysis;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod notifications;
pub mod quote;
pub mod sse;
pub mod traits;
pub mod ui;
