//! Quote service client.

use std::sync::Arc;

use serde::Serialize;

use super::models::{normalize_symbol, StockQuote};
use crate::config::AppConfig;
use crate::error::QuoteError;
use crate::traits::{Headers, HttpClient};

#[derive(Debug, Serialize)]
struct QuoteRequest<'a> {
    symbol: &'a str,
}

/// Fetches quote snapshots with a single buffered POST.
#[derive(Clone)]
pub struct QuoteClient {
    http: Arc<dyn HttpClient>,
    url: String,
    api_key: String,
}

impl QuoteClient {
    pub fn new(http: Arc<dyn HttpClient>, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(http: Arc<dyn HttpClient>, config: &AppConfig) -> Self {
        Self::new(http, config.quote_url(), config.api_key.clone())
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
        headers
    }

    /// Look up one symbol.
    pub async fn fetch(&self, symbol: &str) -> Result<StockQuote, QuoteError> {
        let symbol = normalize_symbol(symbol).ok_or(QuoteError::EmptySymbol)?;
        let body = serde_json::to_string(&QuoteRequest { symbol: &symbol })
            .map_err(|e| QuoteError::InvalidResponse(e.to_string()))?;

        tracing::debug!(%symbol, url = %self.url, "fetching quote");
        let response = self.http.post(&self.url, &body, &self.headers()).await?;
        let text = String::from_utf8_lossy(&response.body);

        if !response.is_success() {
            let err = QuoteError::from_status(response.status, &text);
            tracing::warn!(status = response.status, code = err.error_code(), "quote request failed");
            return Err(err);
        }

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| QuoteError::InvalidResponse(e.to_string()))?;

        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return Err(QuoteError::Rejected(message.to_string()));
        }

        serde_json::from_value(value).map_err(|e| QuoteError::InvalidResponse(e.to_string()))
    }
}
