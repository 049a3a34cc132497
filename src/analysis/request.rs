//! Analysis request payload.

use serde::Serialize;

use crate::quote::StockQuote;

/// Body of the streaming analysis POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest<'a> {
    pub symbol: &'a str,
    pub stock_data: &'a StockQuote,
}

impl<'a> AnalysisRequest<'a> {
    pub fn for_quote(quote: &'a StockQuote) -> Self {
        Self {
            symbol: &quote.symbol,
            stock_data: quote,
        }
    }
}
