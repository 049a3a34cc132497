//! Streamed stock analysis.
//!
//! # Module structure
//! - `request` - Request payload
//! - `client` - Opens the event stream and maps HTTP failures
//! - `accumulator` - Appends tokens and publishes the growing text
//! - `session` - One lookup's read loop and its tagged updates
//! - `controller` - One running session per display
//! - `view` - Display-side state fed by session updates

mod accumulator;
mod client;
mod controller;
mod request;
mod session;
mod view;

pub use accumulator::Accumulator;
pub use client::AnalysisClient;
pub use controller::AnalysisController;
pub use request::AnalysisRequest;
pub use session::{consume_stream, AnalysisSession, AnalysisUpdate, SessionEvent, SessionId};
pub use view::AnalysisView;
