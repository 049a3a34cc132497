//! Color theme constants for the analysis panel

use ratatui::style::Color;

/// Panel title
pub const COLOR_TITLE: Color = Color::White;

/// Streaming marker next to the title
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error panel text
pub const COLOR_ERROR: Color = Color::LightRed;
