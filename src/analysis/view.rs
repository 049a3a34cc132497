//! Display-side analysis state.

use super::session::{AnalysisUpdate, SessionEvent, SessionId};
use crate::error::AnalysisError;
use crate::markup::{render_markup, RenderNode};
use crate::notifications::Notification;

/// What the analysis panel shows.
///
/// Owns the AnalysisText of the active session. Updates from any other
/// session are ignored, so a superseded stream can never write into the
/// current display.
#[derive(Debug, Default)]
pub struct AnalysisView {
    active: Option<SessionId>,
    symbol: Option<String>,
    text: String,
    loading: bool,
    error: Option<AnalysisError>,
    notifications: Vec<Notification>,
}

impl AnalysisView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `session` the active one and reset the panel.
    pub fn begin(&mut self, session: SessionId, symbol: impl Into<String>) {
        self.active = Some(session);
        self.symbol = Some(symbol.into());
        self.text.clear();
        self.loading = true;
        self.error = None;
    }

    /// Apply an update. Returns `true` if the view changed.
    pub fn apply(&mut self, update: AnalysisUpdate) -> bool {
        if self.active != Some(update.session) {
            tracing::debug!(session = %update.session, "discarding update from inactive session");
            return false;
        }

        match update.event {
            SessionEvent::Started => {
                self.loading = true;
            }
            SessionEvent::Text(text) => {
                self.text = text;
            }
            SessionEvent::Completed => {
                self.loading = false;
            }
            SessionEvent::Failed(err) => {
                self.text.clear();
                self.loading = false;
                self.notifications.push(Notification::from_analysis_error(&err));
                self.error = Some(err);
            }
        }
        true
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.active
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        self.error.as_ref()
    }

    /// Whether the active session has ended, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.active.is_some() && !self.loading
    }

    /// Render nodes for the current text.
    pub fn nodes(&self) -> Vec<RenderNode> {
        render_markup(&self.text)
    }

    /// Pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RATE_LIMIT_MESSAGE;
    use crate::traits::HttpError;

    fn update(session: SessionId, event: SessionEvent) -> AnalysisUpdate {
        AnalysisUpdate { session, event }
    }

    #[test]
    fn test_text_follows_active_session() {
        let mut view = AnalysisView::new();
        let id = SessionId::new();
        view.begin(id, "AAPL");

        assert!(view.apply(update(id, SessionEvent::Started)));
        assert!(view.apply(update(id, SessionEvent::Text("Hello".into()))));
        assert!(view.apply(update(id, SessionEvent::Text("Hello world".into()))));
        assert!(view.is_loading());
        assert!(view.apply(update(id, SessionEvent::Completed)));

        assert_eq!(view.text(), "Hello world");
        assert!(view.is_finished());
        assert_eq!(view.symbol(), Some("AAPL"));
    }

    #[test]
    fn test_stale_session_updates_discarded() {
        let mut view = AnalysisView::new();
        let old = SessionId::new();
        let new = SessionId::new();

        view.begin(old, "AAPL");
        view.apply(update(old, SessionEvent::Text("old text".into())));
        view.begin(new, "MSFT");
        assert_eq!(view.text(), "");

        assert!(!view.apply(update(old, SessionEvent::Text("old text more".into()))));
        assert!(!view.apply(update(old, SessionEvent::Completed)));
        assert_eq!(view.text(), "");
        assert!(view.is_loading());
        assert_eq!(view.active_session(), Some(new));
    }

    #[test]
    fn test_failure_discards_text_and_notifies() {
        let mut view = AnalysisView::new();
        let id = SessionId::new();
        view.begin(id, "GOOGL");
        view.apply(update(id, SessionEvent::Text("partial".into())));

        let err = AnalysisError::from_http(HttpError::ServerError {
            status: 429,
            message: String::new(),
        });
        view.apply(update(id, SessionEvent::Failed(err)));

        assert_eq!(view.text(), "");
        assert!(!view.is_loading());
        assert_eq!(view.error().map(|e| e.user_message()), Some(RATE_LIMIT_MESSAGE.to_string()));

        let notices = view.take_notifications();
        assert_eq!(notices.len(), 1);
        assert!(view.take_notifications().is_empty());
    }

    #[test]
    fn test_update_before_begin_is_ignored() {
        let mut view = AnalysisView::new();
        assert!(!view.apply(update(SessionId::new(), SessionEvent::Text("x".into()))));
        assert!(!view.is_finished());
    }
}
