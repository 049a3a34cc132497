//! Transient notifications for failed lookups.
//!
//! A notification is printed as a toast line by the display and, on macOS,
//! also delivered to Notification Center through `osascript` (no bundle
//! identifier or permissions needed).

use crate::error::{AnalysisError, ErrorCategory, QuoteError};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Warning,
}

/// A transient, user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub level: NoticeLevel,
}

impl Notification {
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level: NoticeLevel::Error,
        }
    }

    /// Notice raised alongside the inline error panel.
    pub fn from_analysis_error(err: &AnalysisError) -> Self {
        let title = match err.category() {
            ErrorCategory::RateLimit => "Rate limited",
            ErrorCategory::Quota => "Usage limit",
            _ => "Analysis failed",
        };
        let level = if err.category().has_dedicated_notice() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Error
        };
        Self {
            title: title.to_string(),
            body: err.notification_message(),
            level,
        }
    }

    pub fn from_quote_error(err: &QuoteError) -> Self {
        Self::error("Lookup failed", err.user_message())
    }

    /// One-line rendering for terminals.
    pub fn toast_line(&self) -> String {
        let marker = match self.level {
            NoticeLevel::Error => "✗",
            NoticeLevel::Warning => "!",
        };
        format!("{} {}: {}", marker, self.title, self.body)
    }
}

/// Send a native OS notification.
///
/// Spawns a background task so dispatch never blocks the caller. Outside a
/// tokio runtime only the log line is emitted.
pub fn dispatch(notification: &Notification) {
    tracing::info!(title = %notification.title, "notification: {}", notification.body);

    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        return;
    };

    let title = notification.title.clone();
    let body = notification.body.clone();
    handle.spawn(async move {
        let _ = tokio::task::spawn_blocking(move || {
            send_notification(&format!("marketx: {}", title), &body);
        })
        .await;
    });
}

/// Escape a string for an AppleScript string literal.
pub fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(target_os = "macos")]
fn send_notification(title: &str, body: &str) {
    use std::process::Command;

    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape_applescript(body),
        escape_applescript(title)
    );

    match Command::new("osascript").arg("-e").arg(&script).output() {
        Ok(output) if !output.status.success() => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!("osascript notification failed: {}", stderr.trim());
        }
        Err(e) => {
            tracing::warn!("Failed to spawn osascript: {}", e);
        }
        _ => {
            tracing::debug!("OS notification sent successfully");
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn send_notification(_title: &str, _body: &str) {
    // Toast line only on other platforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RATE_LIMIT_MESSAGE;
    use crate::traits::HttpError;

    #[test]
    fn test_rate_limit_notice() {
        let err = AnalysisError::from_http(HttpError::ServerError {
            status: 429,
            message: String::new(),
        });
        let notice = Notification::from_analysis_error(&err);
        assert_eq!(notice.title, "Rate limited");
        assert_eq!(notice.body, RATE_LIMIT_MESSAGE);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.toast_line(), format!("! Rate limited: {}", RATE_LIMIT_MESSAGE));
    }

    #[test]
    fn test_generic_failure_notice() {
        let notice = Notification::from_analysis_error(&AnalysisError::NoResponseBody);
        assert_eq!(notice.title, "Analysis failed");
        assert_eq!(notice.body, "No response body");
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_escape_applescript() {
        assert_eq!(escape_applescript(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
    }

    #[test]
    fn test_dispatch_outside_runtime_does_not_panic() {
        dispatch(&Notification::error("t", "b"));
    }
}
