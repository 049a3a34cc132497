//! Classification of framed protocol lines.

/// Prefix that marks a data-frame line.
pub const DATA_PREFIX: &str = "data: ";

/// Payload that marks the advisory end of the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Represents a classified SSE line
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Comment line (starts with ':'), e.g. a keep-alive
    Comment(String),
    /// Empty or whitespace-only line
    Blank,
    /// Any other line not carrying the `data: ` prefix
    Unrecognized(String),
    /// Data payload with the prefix and surrounding whitespace removed
    Data(String),
    /// The `[DONE]` terminator
    Done,
}

impl SseLine {
    /// Whether this line can contribute a token.
    pub fn is_data(&self) -> bool {
        matches!(self, SseLine::Data(_))
    }
}

/// Classify a single framed line.
///
/// Order matters: a comment is recognised before the blank check, and the
/// data prefix is matched literally (`data:` without the space is not a
/// data-frame on this wire).
pub fn classify_line(line: &str) -> SseLine {
    if let Some(comment) = line.strip_prefix(':') {
        return SseLine::Comment(comment.trim().to_string());
    }

    if line.trim().is_empty() {
        return SseLine::Blank;
    }

    let Some(rest) = line.strip_prefix(DATA_PREFIX) else {
        return SseLine::Unrecognized(line.to_string());
    };

    let payload = rest.trim();
    if payload == DONE_SENTINEL {
        SseLine::Done
    } else {
        SseLine::Data(payload.to_string())
    }
}
