//! Inline markup rendering for analysis text
//!
//! Maps each line of the analysis independently to a [`RenderNode`]:
//! - `**Title**` on its own line - header
//! - a line containing `**bold**` spans - paragraph of plain/strong spans
//! - `- item` or `• item` - bullet
//! - any other non-blank line - text
//! - blank lines produce nothing
//!
//! Rendering is pure: the same text always yields the same nodes, so the
//! display simply re-renders the whole text on every update.

pub mod styles;

use once_cell::sync::Lazy;
use ratatui::text::{Line, Span};
use regex::Regex;

use styles::{BULLET_GLYPH, STYLE_BULLET, STYLE_HEADER, STYLE_STRONG, STYLE_TEXT};

const MARKER: &str = "**";

/// Non-greedy `**...**` pair
static STRONG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*.*?\*\*").expect("Invalid strong regex pattern"));

/// A span inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Plain(String),
    Strong(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(t) | InlineSpan::Strong(t) => t,
        }
    }
}

/// One rendered line of analysis text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Header(String),
    Paragraph(Vec<InlineSpan>),
    Bullet(String),
    Text(String),
}

/// Render the full analysis text into nodes.
pub fn render_markup(text: &str) -> Vec<RenderNode> {
    text.split('\n').filter_map(render_line).collect()
}

/// Render a single line; `None` for blank lines.
pub fn render_line(line: &str) -> Option<RenderNode> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.len() > 2 * MARKER.len() && trimmed.starts_with(MARKER) && trimmed.ends_with(MARKER)
    {
        let title = trimmed.replace(MARKER, "");
        let title = title.trim();
        if !title.is_empty() {
            return Some(RenderNode::Header(title.to_string()));
        }
    }

    if line.contains(MARKER) {
        let spans = split_strong(line);
        // Markers with nothing between them render as typed
        if spans.iter().all(|span| span.text().is_empty()) {
            return Some(RenderNode::Text(line.to_string()));
        }
        return Some(RenderNode::Paragraph(spans));
    }

    if let Some(item) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("• "))
    {
        return Some(RenderNode::Bullet(item.to_string()));
    }

    Some(RenderNode::Text(line.to_string()))
}

/// Split a line into alternating plain and strong spans, in order.
///
/// An empty `****` pair still yields a `Strong("")` span.
fn split_strong(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in STRONG_REGEX.find_iter(line) {
        if m.start() > last {
            spans.push(InlineSpan::Plain(line[last..m.start()].to_string()));
        }
        let inner = &m.as_str()[MARKER.len()..m.as_str().len() - MARKER.len()];
        spans.push(InlineSpan::Strong(inner.to_string()));
        last = m.end();
    }

    if last < line.len() {
        spans.push(InlineSpan::Plain(line[last..].to_string()));
    }
    spans
}

/// Markup-free text of the nodes, one node per line.
pub fn to_plain(nodes: &[RenderNode]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            RenderNode::Header(t) | RenderNode::Text(t) => t.clone(),
            RenderNode::Paragraph(spans) => spans.iter().map(InlineSpan::text).collect(),
            RenderNode::Bullet(t) => format!("{} {}", BULLET_GLYPH, t),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Styled terminal lines for the nodes.
///
/// Headers after the first node are preceded by an empty line.
pub fn nodes_to_lines(nodes: &[RenderNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(nodes.len());

    for (i, node) in nodes.iter().enumerate() {
        match node {
            RenderNode::Header(title) => {
                if i > 0 {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(title.clone(), STYLE_HEADER)));
            }
            RenderNode::Paragraph(spans) => {
                lines.push(Line::from(
                    spans
                        .iter()
                        .map(|span| match span {
                            InlineSpan::Plain(t) => Span::styled(t.clone(), STYLE_TEXT),
                            InlineSpan::Strong(t) => Span::styled(t.clone(), STYLE_STRONG),
                        })
                        .collect::<Vec<_>>(),
                ));
            }
            RenderNode::Bullet(item) => {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(BULLET_GLYPH, STYLE_BULLET),
                    Span::raw(" "),
                    Span::styled(item.clone(), STYLE_TEXT),
                ]));
            }
            RenderNode::Text(text) => {
                lines.push(Line::from(Span::styled(text.clone(), STYLE_TEXT)));
            }
        }
    }
    lines
}
