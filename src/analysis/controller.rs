//! Keeps at most one analysis session running per display.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::client::AnalysisClient;
use super::session::{AnalysisSession, AnalysisUpdate, SessionId};
use crate::error::AnalysisError;
use crate::quote::StockQuote;
use crate::sse::DEFAULT_MAX_PENDING_BYTES;

struct RunningSession {
    id: SessionId,
    handle: JoinHandle<Result<String, AnalysisError>>,
}

/// Starts analysis sessions on the tokio runtime.
///
/// Starting a new session aborts the one in flight. Updates of the aborted
/// session that are already queued are still tagged with its id, so the
/// display discards them.
pub struct AnalysisController {
    client: AnalysisClient,
    updates: UnboundedSender<AnalysisUpdate>,
    max_pending_bytes: Option<usize>,
    current: Option<RunningSession>,
}

impl AnalysisController {
    pub fn new(client: AnalysisClient, updates: UnboundedSender<AnalysisUpdate>) -> Self {
        Self {
            client,
            updates,
            max_pending_bytes: Some(DEFAULT_MAX_PENDING_BYTES),
            current: None,
        }
    }

    /// Set the decode buffer cap for sessions started from now on.
    pub fn with_max_pending_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_pending_bytes = limit;
        self
    }

    /// Start analysing `quote`, superseding any running session.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, quote: StockQuote) -> SessionId {
        self.cancel();

        let session = AnalysisSession::new(self.client.clone(), quote, self.updates.clone())
            .with_max_pending_bytes(self.max_pending_bytes);
        let id = session.id();
        let handle = tokio::spawn(session.run());

        self.current = Some(RunningSession { id, handle });
        id
    }

    /// Abort the running session, if any.
    pub fn cancel(&mut self) {
        if let Some(running) = self.current.take() {
            if !running.handle.is_finished() {
                tracing::debug!(session = %running.id, "aborting superseded analysis session");
            }
            running.handle.abort();
        }
    }

    /// Id of the most recently started session.
    pub fn active_session(&self) -> Option<SessionId> {
        self.current.as_ref().map(|r| r.id)
    }

    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .map(|r| !r.handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for AnalysisController {
    fn drop(&mut self) {
        self.cancel();
    }
}
