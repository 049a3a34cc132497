//! SSE (Server-Sent Events) stream parser
//!
//! Turns the chunked body of a chat-completion style analysis stream into
//! content tokens.
//! SSE format consumed here:
//! - `data: <json>` - data payload line
//! - `data: [DONE]` - advisory end of stream
//! - Empty line - keep-alive / event separator (ignored)
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `decoder` - Incremental UTF-8 decoding of byte chunks
//! - `framer` - Newline framing over the decode buffer
//! - `events` - Line classification (SseLine)
//! - `parser` - Frame decoding and the stateful ChatStreamParser

mod decoder;
mod events;
mod framer;
mod parser;

// Re-export public types
pub use decoder::Utf8StreamDecoder;
pub use events::{classify_line, SseLine, DATA_PREFIX, DONE_SENTINEL};
pub use framer::LineFramer;
pub use parser::{decode_frame, ChatStreamParser, FrameError, DEFAULT_MAX_PENDING_BYTES};
