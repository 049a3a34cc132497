//! Quote lookups against a real HTTP server.

mod common;

use std::sync::Arc;

use common::quote_json;
use marketx::adapters::ReqwestHttpClient;
use marketx::config::AppConfig;
use marketx::error::QuoteError;
use marketx::quote::QuoteClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> QuoteClient {
    let config = AppConfig::new(server.uri(), "anon");
    QuoteClient::from_config(Arc::new(ReqwestHttpClient::new()), &config)
}

#[tokio::test]
async fn test_fetch_quote() {
    let server = MockServer::start().await;
    let mut body = quote_json("AAPL");
    body["historicalPrices"] = serde_json::json!([
        { "date": "2024-03-01", "close": 179.66, "high": 180.5, "low": 177.4, "open": 179.5, "volume": 73488000 }
    ]);

    Mock::given(method("POST"))
        .and(path("/functions/v1/fetch-stock"))
        .and(body_json(serde_json::json!({ "symbol": "AAPL" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let quote = client(&server).fetch("aapl").await.unwrap();
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.market_cap, 2.95e12);
    assert_eq!(quote.historical_prices.len(), 1);
    assert_eq!(quote.historical_prices[0].high, 180.5);
}

#[tokio::test]
async fn test_unknown_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/fetch-stock"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "No data found, symbol may be delisted" })),
        )
        .mount(&server)
        .await;

    let err = client(&server).fetch("ZZZZ").await.unwrap_err();
    assert_eq!(
        err,
        QuoteError::Server {
            status: 400,
            message: "No data found, symbol may be delisted".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_quote_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/fetch-stock"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client(&server).fetch("AAPL").await.unwrap_err();
    assert!(matches!(err, QuoteError::InvalidResponse(_)));
}
