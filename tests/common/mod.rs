//! Common test utilities for integration tests.
//!
//! Builders for SSE bodies and quote payloads, plus a helper that drives a
//! chunked body through the full parse/accumulate pipeline.

#![allow(dead_code)]

use bytes::Bytes;
use marketx::analysis::{consume_stream, Accumulator, SessionId};
use marketx::error::AnalysisError;
use marketx::quote::StockQuote;
use marketx::sse::ChatStreamParser;
use marketx::traits::ByteStream;
use tokio::sync::mpsc;

/// One `data:` frame carrying `content`, followed by a blank line.
pub fn frame(content: &str) -> String {
    format!(
        "data: {}\n\n",
        serde_json::json!({ "choices": [{ "delta": { "content": content } }] })
    )
}

/// A complete stream of frames terminated by `[DONE]`.
pub fn sse_body(tokens: &[&str]) -> String {
    let mut body: String = tokens.iter().map(|t| frame(t)).collect();
    body.push_str("data: [DONE]\n\n");
    body
}

/// Split `body` into chunks of `size` bytes (the last may be shorter).
pub fn chunk_bytes(body: &[u8], size: usize) -> Vec<Bytes> {
    body.chunks(size.max(1)).map(Bytes::copy_from_slice).collect()
}

/// Run chunks through parser and accumulator, returning the final text.
pub async fn run_chunks(chunks: Vec<Bytes>) -> Result<String, AnalysisError> {
    let stream: ByteStream = Box::pin(futures::stream::iter(chunks.into_iter().map(Ok)));
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut accumulator = Accumulator::new(SessionId::new(), tx);
    let mut parser = ChatStreamParser::new();

    consume_stream(stream, &mut parser, &mut accumulator).await?;
    Ok(accumulator.into_text())
}

pub fn quote_json(symbol: &str) -> serde_json::Value {
    serde_json::json!({
        "symbol": symbol,
        "name": "Apple Inc.",
        "price": 189.84,
        "change": 1.52,
        "changePercent": 0.81,
        "dayHigh": 190.32,
        "dayLow": 187.6,
        "previousClose": 188.32,
        "volume": 48210400,
        "marketCap": 2950000000000u64,
        "fiftyTwoWeekHigh": 199.62,
        "fiftyTwoWeekLow": 164.08
    })
}

pub fn quote(symbol: &str) -> StockQuote {
    serde_json::from_value(quote_json(symbol)).unwrap()
}
