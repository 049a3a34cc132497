//! Line framing over a growing text buffer.

/// Splits decoded stream text into newline-terminated lines.
///
/// Owns the decode buffer: text that has not yet been resolved into a
/// complete line stays here until a later chunk supplies the newline.
/// No maximum line length is enforced at this level; callers that need a
/// bound check [`LineFramer::pending_len`].
#[derive(Debug, Default)]
pub struct LineFramer {
    buffer: String,
}

impl LineFramer {
    /// Create an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append decoded text to the buffer.
    pub fn push(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Extract the next complete line, without its `\n` and any trailing `\r`.
    ///
    /// Returns `None` when no newline remains in the buffer.
    pub fn next_line(&mut self) -> Option<String> {
        let newline_pos = self.buffer.find('\n')?;
        let mut line: String = self.buffer.drain(..=newline_pos).collect();
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
        Some(line)
    }

    /// Put a line back at the front of the buffer so the next pass sees it first.
    pub fn unshift_line(&mut self, line: &str) {
        let mut restored = String::with_capacity(line.len() + 1 + self.buffer.len());
        restored.push_str(line);
        restored.push('\n');
        restored.push_str(&self.buffer);
        self.buffer = restored;
    }

    /// Take whatever is left in the buffer (an unterminated trailing line).
    pub fn take_remainder(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Bytes currently buffered.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
