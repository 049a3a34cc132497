//! Lookup orchestration: quote card, then the streamed analysis.

use std::future::Future;
use std::io::{self, IsTerminal};
use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::analysis::{AnalysisClient, AnalysisController, AnalysisUpdate, AnalysisView};
use crate::cli_output::{print_error_panel, print_header, print_quote_card, print_toast};
use crate::config::AppConfig;
use crate::markup::{render_markup, to_plain};
use crate::notifications::{self, Notification};
use crate::quote::{normalize_symbol, QuoteClient, StockQuote};
use crate::traits::HttpClient;
use crate::ui::{InlineRenderer, PANEL_TITLE, DEFAULT_VIEWPORT_HEIGHT};

/// How the analysis is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Live inline viewport, committed to scrollback when done
    Inline,
    /// Final text only, for pipes and files
    Plain,
}

impl OutputMode {
    pub fn detect() -> Self {
        if io::stdout().is_terminal() {
            OutputMode::Inline
        } else {
            OutputMode::Plain
        }
    }
}

/// Outcome of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Analyzed,
    QuoteOnly,
    QuoteFailed,
    AnalysisFailed,
    Interrupted,
}

impl LookupOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, LookupOutcome::QuoteFailed | LookupOutcome::AnalysisFailed)
    }
}

/// Runs lookups one after another against a single analysis display.
pub struct App {
    quotes: QuoteClient,
    controller: AnalysisController,
    updates: UnboundedReceiver<AnalysisUpdate>,
    view: AnalysisView,
    mode: OutputMode,
}

impl App {
    pub fn new(config: &AppConfig, http: Arc<dyn HttpClient>, mode: OutputMode) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let analysis = AnalysisClient::from_config(http.clone(), config);

        Self {
            quotes: QuoteClient::from_config(http, config),
            controller: AnalysisController::new(analysis, tx)
                .with_max_pending_bytes(config.max_pending_bytes),
            updates: rx,
            view: AnalysisView::new(),
            mode,
        }
    }

    pub fn view(&self) -> &AnalysisView {
        &self.view
    }

    /// Look up every symbol in order. Stops early on Ctrl-C.
    pub async fn run(&mut self, symbols: &[String], quote_only: bool) -> Result<Vec<LookupOutcome>> {
        let mut outcomes = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let outcome = self.lookup(symbol, quote_only).await?;
            let interrupted = outcome == LookupOutcome::Interrupted;
            outcomes.push(outcome);
            if interrupted {
                break;
            }
        }
        Ok(outcomes)
    }

    /// Fetch and print the quote, then stream its analysis.
    pub async fn lookup(&mut self, symbol: &str, quote_only: bool) -> Result<LookupOutcome> {
        print_header(&normalize_symbol(symbol).unwrap_or_else(|| symbol.to_string()));

        let quote = match self.quotes.fetch(symbol).await {
            Ok(quote) => quote,
            Err(err) => {
                tracing::warn!(symbol, code = err.error_code(), "quote lookup failed");
                print_error_panel(&err.user_message());
                self.raise(Notification::from_quote_error(&err));
                return Ok(LookupOutcome::QuoteFailed);
            }
        };

        print_quote_card(&quote);
        if quote_only {
            return Ok(LookupOutcome::QuoteOnly);
        }

        self.analyze(quote, tokio::signal::ctrl_c()).await
    }

    /// Stream the analysis of `quote` until it finishes or `interrupt` resolves.
    async fn analyze<F>(&mut self, quote: StockQuote, interrupt: F) -> Result<LookupOutcome>
    where
        F: Future,
    {
        let symbol = quote.symbol.clone();
        let session = self.controller.start(quote);
        self.view.begin(session, symbol);

        let mut renderer = match self.mode {
            OutputMode::Inline => Some(InlineRenderer::stdout(DEFAULT_VIEWPORT_HEIGHT)?),
            OutputMode::Plain => None,
        };
        if let Some(renderer) = renderer.as_mut() {
            renderer.draw(&self.view)?;
        }

        tokio::pin!(interrupt);
        let mut interrupted = false;
        while !self.view.is_finished() {
            tokio::select! {
                update = self.updates.recv() => {
                    let Some(update) = update else { break };
                    if self.view.apply(update) {
                        if let Some(renderer) = renderer.as_mut() {
                            renderer.draw(&self.view)?;
                        }
                    }
                }
                _ = &mut interrupt => {
                    tracing::info!(session = %session, "analysis interrupted");
                    self.controller.cancel();
                    interrupted = true;
                    break;
                }
            }
        }

        match renderer.as_mut() {
            Some(renderer) => renderer.commit(&self.view)?,
            None => self.print_plain(),
        }

        for notice in self.view.take_notifications() {
            self.raise(notice);
        }

        Ok(if interrupted {
            LookupOutcome::Interrupted
        } else if self.view.error().is_some() {
            LookupOutcome::AnalysisFailed
        } else {
            LookupOutcome::Analyzed
        })
    }

    fn print_plain(&self) {
        println!("{}", PANEL_TITLE);
        match self.view.error() {
            Some(err) => print_error_panel(&err.user_message()),
            None => println!("{}", to_plain(&render_markup(self.view.text()))),
        }
    }

    fn raise(&self, notice: Notification) {
        print_toast(&notice.toast_line());
        notifications::dispatch(&notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use bytes::Bytes;

    const QUOTE_URL: &str = "https://api.test/functions/v1/fetch-stock";
    const ANALYZE_URL: &str = "https://api.test/functions/v1/analyze-stock";

    fn app(mock: &MockHttpClient) -> App {
        let config = AppConfig::new("https://api.test", "k");
        App::new(&config, Arc::new(mock.clone()), OutputMode::Plain)
    }

    fn quote_response() -> MockResponse {
        MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"symbol":"AAPL","name":"Apple Inc.","price":189.84}"#),
        ))
    }

    #[tokio::test]
    async fn test_lookup_streams_analysis() {
        let mock = MockHttpClient::new();
        mock.set_response(QUOTE_URL, quote_response());
        mock.set_response(
            ANALYZE_URL,
            MockResponse::Stream(vec![
                Bytes::from("data: {\"choices\":[{\"delta\":{\"content\":\"**Summary**\\n\"}}]}\n\n"),
                Bytes::from("data: {\"choices\":[{\"delta\":{\"content\":\"Solid quarter.\"}}]}\n\ndata: [DONE]\n\n"),
            ]),
        );

        let mut app = app(&mock);
        let outcome = app.lookup("aapl", false).await.unwrap();

        assert_eq!(outcome, LookupOutcome::Analyzed);
        assert_eq!(app.view().text(), "**Summary**\nSolid quarter.");
        assert_eq!(mock.get_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_quote_failure_skips_analysis() {
        let mock = MockHttpClient::new();
        mock.set_response(
            QUOTE_URL,
            MockResponse::Success(Response::new(
                400,
                Bytes::from(r#"{"error":"Invalid stock symbol"}"#),
            )),
        );

        let mut app = app(&mock);
        let outcome = app.lookup("ZZZZ", false).await.unwrap();

        assert_eq!(outcome, LookupOutcome::QuoteFailed);
        assert!(outcome.is_failure());
        assert_eq!(mock.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_rate_limited_analysis() {
        let mock = MockHttpClient::new();
        mock.set_response(QUOTE_URL, quote_response());
        mock.set_response(
            ANALYZE_URL,
            MockResponse::Success(Response::new(429, Bytes::from(r#"{"error":"busy"}"#))),
        );

        let mut app = app(&mock);
        let outcome = app.lookup("AAPL", false).await.unwrap();

        assert_eq!(outcome, LookupOutcome::AnalysisFailed);
        assert_eq!(app.view().text(), "");
        assert!(app.view().error().is_some());
    }

    #[tokio::test]
    async fn test_interrupt_cancels_hanging_stream() {
        let mock = MockHttpClient::new();
        mock.set_response(
            ANALYZE_URL,
            MockResponse::StreamThenHang(vec![
                Bytes::from("data: {\"choices\":[{\"delta\":{\"content\":\"Partial\"}}]}\n\n"),
                Bytes::from("data: {\"choices\":[{\"delta\":{\"content\":\" text\"}}]}\n\n"),
            ]),
        );
        let quote: StockQuote =
            serde_json::from_str(r#"{"symbol":"AAPL","price":189.84}"#).unwrap();

        let mut app = app(&mock);
        // Resolves only after the loop has gone through several updates
        let interrupt = tokio::time::sleep(std::time::Duration::from_millis(200));
        let outcome = app.analyze(quote, interrupt).await.unwrap();

        assert_eq!(outcome, LookupOutcome::Interrupted);
        assert_eq!(app.view().text(), "Partial text");
        assert!(!app.controller.is_running());
    }

    #[tokio::test]
    async fn test_run_quote_only() {
        let mock = MockHttpClient::new();
        mock.set_response(QUOTE_URL, quote_response());

        let mut app = app(&mock);
        let outcomes = app
            .run(&["AAPL".to_string(), "AAPL".to_string()], true)
            .await
            .unwrap();

        assert_eq!(outcomes, vec![LookupOutcome::QuoteOnly, LookupOutcome::QuoteOnly]);
        assert!(mock.get_requests().iter().all(|r| r.url == QUOTE_URL));
    }
}
