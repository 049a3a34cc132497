//! Analysis panel rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_TITLE};
use crate::analysis::AnalysisView;
use crate::markup::nodes_to_lines;

pub const PANEL_TITLE: &str = "AI Analysis";
pub const PANEL_SUBTITLE: &str = "Powered by AI";
pub const STREAMING_MARKER: &str = "✦";

fn title_lines(view: &AnalysisView) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        PANEL_TITLE,
        Style::new().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
    )];
    if let Some(symbol) = view.symbol() {
        title.push(Span::styled(format!(" · {}", symbol), Style::new().fg(COLOR_DIM)));
    }
    if view.is_loading() {
        title.push(Span::raw(" "));
        title.push(Span::styled(STREAMING_MARKER, Style::new().fg(COLOR_ACTIVE)));
    }

    vec![
        Line::from(title),
        Line::from(Span::styled(PANEL_SUBTITLE, Style::new().fg(COLOR_DIM))),
        Line::default(),
    ]
}

/// All lines of the analysis panel for the current view state.
pub fn analysis_lines(view: &AnalysisView) -> Vec<Line<'static>> {
    let mut lines = title_lines(view);

    if let Some(err) = view.error() {
        lines.push(Line::from(Span::styled(
            format!("✗ {}", err.user_message()),
            Style::new().fg(COLOR_ERROR),
        )));
        return lines;
    }

    if view.text().is_empty() {
        if view.is_loading() {
            let symbol = view.symbol().unwrap_or("stock");
            lines.push(Line::from(Span::styled(
                format!("Analyzing {}...", symbol),
                Style::new().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            )));
        }
        return lines;
    }

    lines.extend(nodes_to_lines(&view.nodes()));
    lines
}

/// Rows the lines occupy when wrapped to `width` columns.
pub fn estimate_wrapped_line_count(lines: &[Line], width: usize) -> usize {
    if width == 0 {
        return lines.len();
    }

    lines
        .iter()
        .map(|line| {
            let cols: usize = line
                .spans
                .iter()
                .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
                .sum();
            if cols == 0 {
                1
            } else {
                cols.div_ceil(width)
            }
        })
        .sum()
}

/// Vertical scroll that keeps the last rows of the panel visible.
pub fn tail_scroll(lines: &[Line], area: Rect) -> u16 {
    let total = estimate_wrapped_line_count(lines, area.width as usize);
    let hidden = total.saturating_sub(area.height as usize);
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

/// Render the panel into `area`, showing its tail while it grows.
pub fn render_analysis(frame: &mut Frame, area: Rect, view: &AnalysisView) {
    let lines = analysis_lines(view);
    let scroll = tail_scroll(&lines, area);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
