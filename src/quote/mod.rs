//! Quote lookups.
//!
//! - `models` - `StockQuote` / `HistoricalPrice` wire types
//! - `client` - `QuoteClient` for the quote endpoint

mod client;
mod models;

pub use client::QuoteClient;
pub use models::{normalize_symbol, HistoricalPrice, StockQuote};
