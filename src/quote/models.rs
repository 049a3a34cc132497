//! Quote data models.

use serde::{Deserialize, Serialize};

/// One daily bar of price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Session date, `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: String,
    pub close: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub volume: f64,
}

/// Snapshot of a ticker returned by the quote service.
///
/// Serialised back verbatim as `stockData` in analysis requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub day_high: f64,
    #[serde(default)]
    pub day_low: f64,
    #[serde(default)]
    pub previous_close: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub market_cap: f64,
    #[serde(default)]
    pub fifty_two_week_high: f64,
    #[serde(default)]
    pub fifty_two_week_low: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historical_prices: Vec<HistoricalPrice>,
}

impl StockQuote {
    /// Display name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.symbol
        } else {
            &self.name
        }
    }

    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// Whether a 52-week range is known.
    pub fn has_year_range(&self) -> bool {
        self.fifty_two_week_high > 0.0 || self.fifty_two_week_low > 0.0
    }
}

/// Trim and upper-case a user-entered symbol.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}
