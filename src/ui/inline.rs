//! Inline viewport below the shell prompt.
//!
//! The panel is redrawn in a fixed-height viewport while the analysis
//! streams; the finished rendering is pushed into the scrollback.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{cursor::Show, execute};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::{Paragraph, Widget, Wrap},
    Terminal, TerminalOptions, Viewport,
};

use super::analysis::{analysis_lines, estimate_wrapped_line_count, render_analysis};
use crate::analysis::AnalysisView;

/// Default viewport height in rows.
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 12;

/// Draws an [`AnalysisView`] into an inline viewport.
pub struct InlineRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl InlineRenderer<CrosstermBackend<Stdout>> {
    /// Inline renderer on stdout.
    pub fn stdout(height: u16) -> io::Result<Self> {
        Self::with_backend(CrosstermBackend::new(io::stdout()), height)
    }
}

impl<B: Backend> InlineRenderer<B> {
    pub fn with_backend(backend: B, height: u16) -> Result<Self, B::Error> {
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height.max(1)),
            },
        )?;
        Ok(Self { terminal })
    }

    /// Redraw the viewport with the latest state.
    pub fn draw(&mut self, view: &AnalysisView) -> Result<(), B::Error> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            render_analysis(frame, area, view);
        })?;
        Ok(())
    }

    /// Clear the viewport and write the full panel above it.
    pub fn commit(&mut self, view: &AnalysisView) -> Result<(), B::Error> {
        let lines = analysis_lines(view);
        let width = self.terminal.size()?.width;
        let height = estimate_wrapped_line_count(&lines, width as usize);
        let height = u16::try_from(height).unwrap_or(u16::MAX);

        self.terminal.clear()?;
        self.terminal.insert_before(height, |buf| {
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(buf.area, buf);
        })?;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

/// Install a panic hook that shows the cursor again before reporting.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}
