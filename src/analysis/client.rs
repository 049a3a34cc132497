//! Streaming analysis endpoint client.

use std::sync::Arc;

use super::request::AnalysisRequest;
use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::quote::StockQuote;
use crate::traits::{ByteStream, Headers, HttpClient, HttpError};

/// Opens the analysis event stream for a quote.
#[derive(Clone)]
pub struct AnalysisClient {
    http: Arc<dyn HttpClient>,
    url: String,
    api_key: String,
}

impl AnalysisClient {
    pub fn new(http: Arc<dyn HttpClient>, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(http: Arc<dyn HttpClient>, config: &AppConfig) -> Self {
        Self::new(http, config.analyze_url(), config.api_key.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "text/event-stream".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
        headers
    }

    /// Send the request and return the raw body stream.
    ///
    /// Non-2xx statuses and a missing body are mapped to terminal
    /// [`AnalysisError`]s before any byte is read.
    pub async fn open_stream(&self, quote: &StockQuote) -> Result<ByteStream, AnalysisError> {
        let body = serde_json::to_string(&AnalysisRequest::for_quote(quote))
            .map_err(|e| AnalysisError::Transport(HttpError::Other(e.to_string())))?;

        tracing::info!(symbol = %quote.symbol, "requesting analysis stream");

        self.http
            .post_stream(&self.url, &body, &self.headers())
            .await
            .map_err(|e| {
                let err = AnalysisError::from_http(e);
                tracing::warn!(
                    symbol = %quote.symbol,
                    code = err.error_code(),
                    category = %err.category(),
                    "analysis request failed"
                );
                err
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use bytes::Bytes;

    const URL: &str = "https://api.test/functions/v1/analyze-stock";

    fn quote() -> StockQuote {
        serde_json::from_str(r#"{"symbol":"TSLA","name":"Tesla","price":175.2}"#).unwrap()
    }

    #[tokio::test]
    async fn test_request_headers_and_body() {
        let mock = MockHttpClient::new();
        mock.set_response(URL, MockResponse::Stream(vec![Bytes::from("data: [DONE]\n\n")]));
        let client = AnalysisClient::new(Arc::new(mock.clone()), URL, "anon-key");

        assert!(client.open_stream(&quote()).await.is_ok());

        let request = &mock.get_requests()[0];
        assert_eq!(request.url, URL);
        assert_eq!(request.headers.get("Accept"), Some(&"text/event-stream".to_string()));
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer anon-key".to_string())
        );
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["symbol"], "TSLA");
        assert_eq!(body["stockData"]["price"], 175.2);
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            402,
            Bytes::from(r#"{"error":"Payment required"}"#),
        )));
        let client = AnalysisClient::new(Arc::new(mock), URL, "k");

        let err = match client.open_stream(&quote()).await {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };
        assert!(matches!(err, AnalysisError::QuotaExceeded { .. }));
    }

    #[tokio::test]
    async fn test_empty_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::new())));
        let client = AnalysisClient::new(Arc::new(mock), URL, "k");

        assert!(matches!(
            client.open_stream(&quote()).await,
            Err(AnalysisError::NoResponseBody)
        ));
    }
}
