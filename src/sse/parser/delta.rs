//! Chat-completion delta frame decoding

use serde_json::Value;

/// Why a data-frame payload could not be decoded.
#[derive(Debug)]
pub enum FrameError {
    /// Payload is not (yet) a syntactically complete JSON document
    Incomplete(serde_json::Error),
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::Incomplete(e) => write!(f, "incomplete frame payload: {}", e),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Incomplete(e) => Some(e),
        }
    }
}

/// Decode one data-frame payload into its content token.
///
/// The token lives at `choices[0].delta.content`. A payload that parses but
/// does not carry a non-empty string there yields `Ok(None)`. Only a payload
/// that fails to parse at all is an error.
pub fn decode_frame(payload: &str) -> Result<Option<String>, FrameError> {
    let v: Value = serde_json::from_str(payload).map_err(FrameError::Incomplete)?;

    let token = v
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("delta"))
        .and_then(|delta| delta.get("content"))
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .map(str::to_string);

    Ok(token)
}
