//! Token accumulation.

use tokio::sync::mpsc::UnboundedSender;

use super::session::{AnalysisUpdate, SessionEvent, SessionId};

/// Appends content tokens to the session text and publishes every new value.
///
/// Publishing never fails: if the receiving display is gone the update is
/// dropped and accumulation continues.
#[derive(Debug)]
pub struct Accumulator {
    session: SessionId,
    text: String,
    updates: UnboundedSender<AnalysisUpdate>,
}

impl Accumulator {
    pub fn new(session: SessionId, updates: UnboundedSender<AnalysisUpdate>) -> Self {
        Self {
            session,
            text: String::new(),
            updates,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Append one token and publish the full text.
    pub fn push(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.text.push_str(token);
        self.publish(SessionEvent::Text(self.text.clone()));
    }

    /// Publish a lifecycle event for this session.
    pub fn publish(&self, event: SessionEvent) {
        if self
            .updates
            .send(AnalysisUpdate {
                session: self.session,
                event,
            })
            .is_err()
        {
            tracing::trace!(session = %self.session, "display closed, update dropped");
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
