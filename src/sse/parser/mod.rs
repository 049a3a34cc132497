//! SSE stream parsing logic
//!
//! Contains the stateful `ChatStreamParser` that turns raw body chunks into
//! content tokens, and the frame decoder it delegates to.

mod delta;

pub use delta::{decode_frame, FrameError};

use crate::error::StreamError;
use crate::sse::decoder::Utf8StreamDecoder;
use crate::sse::events::{classify_line, SseLine};
use crate::sse::framer::LineFramer;

/// Default cap on bytes held in the decode buffer (1 MiB).
pub const DEFAULT_MAX_PENDING_BYTES: usize = 1024 * 1024;

/// How a pass treats frames that fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassMode {
    /// More data may still arrive: hold the frame back and stop the pass
    Streaming,
    /// Transport has ended: drop the frame and keep going
    Final,
}

/// Stateful parser for an OpenAI-style chat-completion SSE stream.
///
/// Feed it body chunks in arrival order; each call returns the content
/// tokens that became available, in frame order. One parser serves exactly
/// one streaming session.
#[derive(Debug)]
pub struct ChatStreamParser {
    decoder: Utf8StreamDecoder,
    framer: LineFramer,
    /// Upper bound for the decode buffer; `None` means unbounded
    max_pending_bytes: Option<usize>,
    /// Whether a `[DONE]` terminator has been seen
    done_seen: bool,
    /// Frames put back for re-examination over the parser's lifetime
    held_frames: usize,
}

impl Default for ChatStreamParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStreamParser {
    /// Create a parser with the default buffer cap.
    pub fn new() -> Self {
        Self::with_max_pending_bytes(Some(DEFAULT_MAX_PENDING_BYTES))
    }

    /// Create a parser with a custom buffer cap (`None` disables the cap).
    pub fn with_max_pending_bytes(max_pending_bytes: Option<usize>) -> Self {
        Self {
            decoder: Utf8StreamDecoder::new(),
            framer: LineFramer::new(),
            max_pending_bytes,
            done_seen: false,
            held_frames: 0,
        }
    }

    /// Feed one raw body chunk.
    ///
    /// Returns the tokens extracted during this pass, or a `StreamError` if
    /// the decode buffer grew past its cap.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<String>, StreamError> {
        let text = self.decoder.decode(chunk);
        self.feed_text(&text)
    }

    /// Feed already-decoded text.
    pub fn feed_text(&mut self, text: &str) -> Result<Vec<String>, StreamError> {
        self.framer.push(text);

        let mut tokens = Vec::new();
        self.run_pass(PassMode::Streaming, &mut tokens);

        if let Some(limit) = self.max_pending_bytes {
            let pending = self.framer.pending_len();
            if pending > limit {
                tracing::warn!(pending, limit, "SSE decode buffer exceeded its cap");
                return Err(StreamError::BufferOverflow { pending, limit });
            }
        }

        Ok(tokens)
    }

    /// Finish the stream after the transport reported end-of-stream.
    ///
    /// Flushes the decoder and treats any unterminated trailing line as
    /// complete. Frames that still fail to decode are dropped because no
    /// further data can complete them.
    pub fn finish(&mut self) -> Vec<String> {
        let tail = self.decoder.finish();
        self.framer.push(&tail);

        let remainder = self.framer.take_remainder();
        if !remainder.is_empty() {
            self.framer.push(&remainder);
            if !remainder.ends_with('\n') {
                self.framer.push("\n");
            }
        }

        let mut tokens = Vec::new();
        self.run_pass(PassMode::Final, &mut tokens);
        tokens
    }

    /// Whether a `[DONE]` terminator has been observed.
    pub fn saw_done(&self) -> bool {
        self.done_seen
    }

    /// Bytes currently held in the decode buffer.
    pub fn pending_len(&self) -> usize {
        self.framer.pending_len() + self.decoder.pending_len()
    }

    /// Number of times a frame was held back for re-examination.
    pub fn held_frames(&self) -> usize {
        self.held_frames
    }

    fn run_pass(&mut self, mode: PassMode, tokens: &mut Vec<String>) {
        while let Some(line) = self.framer.next_line() {
            match classify_line(&line) {
                SseLine::Comment(_) | SseLine::Blank | SseLine::Unrecognized(_) => continue,
                SseLine::Done => {
                    self.done_seen = true;
                    tracing::debug!("SSE terminator received");
                    if mode == PassMode::Streaming {
                        break;
                    }
                }
                SseLine::Data(payload) => match decode_frame(&payload) {
                    Ok(Some(token)) => tokens.push(token),
                    Ok(None) => {}
                    Err(e) => match mode {
                        PassMode::Streaming => {
                            tracing::debug!("Holding back frame for more data: {}", e);
                            self.held_frames += 1;
                            self.framer.unshift_line(&line);
                            break;
                        }
                        PassMode::Final => {
                            tracing::debug!("Dropping undecodable frame at end of stream: {}", e);
                        }
                    },
                },
            }
        }
    }
}
