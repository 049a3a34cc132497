//! One streaming analysis session.

use std::fmt;

use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use super::accumulator::Accumulator;
use super::client::AnalysisClient;
use crate::error::{AnalysisError, StreamError};
use crate::quote::StockQuote;
use crate::sse::{ChatStreamParser, DEFAULT_MAX_PENDING_BYTES};
use crate::traits::ByteStream;

/// Unique tag of one streaming session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is enough to tell sessions apart in logs
        let id = self.0.simple().to_string();
        write!(f, "{}", &id[..8])
    }
}

/// What happened in a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Request sent, waiting for the first token
    Started,
    /// Full analysis text after the latest token
    Text(String),
    /// Transport reported end of stream
    Completed,
    /// Terminal failure; the text is void
    Failed(AnalysisError),
}

/// A session event tagged with its session.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisUpdate {
    pub session: SessionId,
    pub event: SessionEvent,
}

/// Drain a body stream through `parser` into `accumulator`.
///
/// Reads strictly in order until the transport ends; `[DONE]` does not end
/// the read loop.
pub async fn consume_stream(
    mut stream: ByteStream,
    parser: &mut ChatStreamParser,
    accumulator: &mut Accumulator,
) -> Result<(), AnalysisError> {
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| StreamError::ReadFailed {
            message: e.to_string(),
        })?;
        for token in parser.feed(&chunk)? {
            accumulator.push(&token);
        }
    }

    for token in parser.finish() {
        accumulator.push(&token);
    }

    tracing::debug!(
        session = %accumulator.session(),
        saw_done = parser.saw_done(),
        held_frames = parser.held_frames(),
        "analysis stream ended"
    );
    Ok(())
}

/// Owns everything one lookup needs: fresh parser state, fresh text.
pub struct AnalysisSession {
    id: SessionId,
    client: AnalysisClient,
    quote: StockQuote,
    max_pending_bytes: Option<usize>,
    updates: UnboundedSender<AnalysisUpdate>,
}

impl AnalysisSession {
    pub fn new(
        client: AnalysisClient,
        quote: StockQuote,
        updates: UnboundedSender<AnalysisUpdate>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            client,
            quote,
            max_pending_bytes: Some(DEFAULT_MAX_PENDING_BYTES),
            updates,
        }
    }

    /// Override the decode buffer cap (`None` disables it).
    pub fn with_max_pending_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_pending_bytes = limit;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Run the session to completion.
    ///
    /// Every outcome is also published as a [`SessionEvent`]. Returns the
    /// final text on success.
    pub async fn run(self) -> Result<String, AnalysisError> {
        let mut accumulator = Accumulator::new(self.id, self.updates);
        accumulator.publish(SessionEvent::Started);
        tracing::info!(session = %self.id, symbol = %self.quote.symbol, "analysis session started");

        let outcome = match self.client.open_stream(&self.quote).await {
            Ok(stream) => {
                let mut parser = ChatStreamParser::with_max_pending_bytes(self.max_pending_bytes);
                consume_stream(stream, &mut parser, &mut accumulator).await
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                accumulator.publish(SessionEvent::Completed);
                tracing::info!(
                    session = %self.id,
                    chars = accumulator.text().chars().count(),
                    "analysis session completed"
                );
                Ok(accumulator.into_text())
            }
            Err(err) => {
                tracing::error!(
                    session = %self.id,
                    code = err.error_code(),
                    "analysis session failed: {}",
                    err
                );
                accumulator.publish(SessionEvent::Failed(err.clone()));
                Err(err)
            }
        }
    }
}
