//! Style constants for rendered analysis text

use ratatui::style::{Color, Modifier, Style};

/// Style for section headers - cyan and bold
pub const STYLE_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for emphasized spans - cyan and bold
pub const STYLE_STRONG: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for the bullet glyph
pub const STYLE_BULLET: Style = Style::new().fg(Color::Cyan);

/// Style for body text
pub const STYLE_TEXT: Style = Style::new();

/// Glyph drawn in front of bullet lines
pub const BULLET_GLYPH: &str = "•";
