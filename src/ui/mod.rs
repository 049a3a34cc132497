//! Terminal rendering of the analysis panel
//!
//! - `analysis` - panel lines, wrapping estimate and tail scrolling
//! - `inline` - inline viewport renderer and scrollback commit
//! - `theme` - panel colors

mod analysis;
mod inline;
mod theme;

pub use analysis::{
    analysis_lines, estimate_wrapped_line_count, render_analysis, tail_scroll, PANEL_SUBTITLE,
    PANEL_TITLE, STREAMING_MARKER,
};
pub use inline::{setup_panic_hook, InlineRenderer, DEFAULT_VIEWPORT_HEIGHT};
pub use theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_TITLE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisUpdate, AnalysisView, SessionEvent, SessionId};
    use crate::error::{AnalysisError, RATE_LIMIT_MESSAGE};
    use crate::traits::HttpError;
    use ratatui::{backend::TestBackend, layout::Rect, text::Line, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn view_with(text: &str, done: bool) -> AnalysisView {
        let mut view = AnalysisView::new();
        let id = SessionId::new();
        view.begin(id, "AAPL");
        view.apply(AnalysisUpdate {
            session: id,
            event: SessionEvent::Text(text.to_string()),
        });
        if done {
            view.apply(AnalysisUpdate {
                session: id,
                event: SessionEvent::Completed,
            });
        }
        view
    }

    #[test]
    fn test_placeholder_while_waiting() {
        let mut view = AnalysisView::new();
        view.begin(SessionId::new(), "NVDA");

        let lines = analysis_lines(&view);
        assert!(line_text(&lines[0]).starts_with(PANEL_TITLE));
        assert!(line_text(&lines[0]).ends_with(STREAMING_MARKER));
        assert_eq!(line_text(lines.last().unwrap()), "Analyzing NVDA...");
    }

    #[test]
    fn test_marker_hidden_when_complete() {
        let view = view_with("**Risk**\n- point one", true);
        let lines = analysis_lines(&view);
        assert!(!line_text(&lines[0]).contains(STREAMING_MARKER));
        assert_eq!(line_text(&lines[3]), "Risk");
        assert_eq!(line_text(&lines[4]), "  • point one");
    }

    #[test]
    fn test_error_panel_replaces_text() {
        let mut view = AnalysisView::new();
        let id = SessionId::new();
        view.begin(id, "AAPL");
        view.apply(AnalysisUpdate {
            session: id,
            event: SessionEvent::Failed(AnalysisError::from_http(HttpError::ServerError {
                status: 429,
                message: String::new(),
            })),
        });

        let lines = analysis_lines(&view);
        assert_eq!(
            line_text(lines.last().unwrap()),
            format!("✗ {}", RATE_LIMIT_MESSAGE)
        );
    }

    #[test]
    fn test_estimate_wrapped_line_count() {
        let lines = vec![Line::from("a".repeat(25)), Line::default(), Line::from("short")];
        assert_eq!(estimate_wrapped_line_count(&lines, 10), 5);
        assert_eq!(estimate_wrapped_line_count(&lines, 0), 3);
    }

    #[test]
    fn test_tail_scroll() {
        let lines: Vec<Line> = (0..30).map(|i| Line::from(format!("line {}", i))).collect();
        assert_eq!(tail_scroll(&lines, Rect::new(0, 0, 40, 10)), 20);
        assert_eq!(tail_scroll(&lines[..5], Rect::new(0, 0, 40, 10)), 0);
    }

    #[test]
    fn test_render_shows_tail() {
        let text: Vec<String> = (1..=20).map(|i| format!("Row {}", i)).collect();
        let view = view_with(&text.join("\n"), false);

        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| render_analysis(f, f.area(), &view))
            .unwrap();

        let screen = buffer_text(&terminal);
        assert!(screen.contains("Row 20"));
        assert!(!screen.contains(PANEL_TITLE));
    }

    #[test]
    fn test_inline_renderer_draws() {
        let view = view_with("**Outlook**\nSteady **growth** ahead.", false);
        let mut renderer = InlineRenderer::with_backend(TestBackend::new(60, 20), 8).unwrap();
        renderer.draw(&view).unwrap();

        let has_content = renderer
            .backend()
            .buffer()
            .content()
            .iter()
            .any(|cell| cell.symbol() != " ");
        assert!(has_content, "inline viewport should render content");
    }
}
