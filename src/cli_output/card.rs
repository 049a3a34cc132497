//! Quote card formatting.

use chrono::{DateTime, Datelike, NaiveDate};

use super::boxes::LINE_WIDTH;
use crate::quote::{HistoricalPrice, StockQuote};

/// `1234567.0` -> `"1,234,567"` (rounded to whole units).
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Market cap with `T`/`B`/`M` suffixes, plain separated digits below a million.
pub fn format_market_cap(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format_thousands(value)
    }
}

pub fn format_volume(value: f64) -> String {
    format_thousands(value)
}

/// `"+1.52 (+0.81%)"`
pub fn format_change(change: f64, percent: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    let pct_sign = if percent >= 0.0 { "+" } else { "" };
    format!("{}{:.2} ({}{:.2}%)", sign, change, pct_sign, percent)
}

/// Month/day label for a history date (`"2024-03-07"` -> `"3/7"`).
pub fn short_date(date: &str) -> Option<String> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|d| d.date_naive()))?;
    Some(format!("{}/{}", day.month(), day.day()))
}

/// One-line summary of the price history, if any.
pub fn history_summary(history: &[HistoricalPrice]) -> Option<String> {
    let first = history.first()?;
    let last = history.last()?;

    let (low, high) = history.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.close), hi.max(p.close))
    });

    let label = |p: &HistoricalPrice| short_date(&p.date).unwrap_or_else(|| p.date.clone());

    Some(format!(
        "{} sessions, close ${:.2} to ${:.2} ({} to {})",
        history.len(),
        low,
        high,
        label(first),
        label(last)
    ))
}

fn row(label: &str, value: &str) -> String {
    format!("  {:<16}{}", label, value)
}

/// Multi-line quote card.
pub fn format_quote_card(quote: &StockQuote) -> Vec<String> {
    let mut lines = vec![
        format!("{}  {}", quote.symbol, quote.display_name()),
        "─".repeat(LINE_WIDTH),
        format!(
            "  ${:.2}  {} {}",
            quote.price,
            if quote.is_up() { "▲" } else { "▼" },
            format_change(quote.change, quote.change_percent)
        ),
        row(
            "Day Range",
            &format!("${:.2} - ${:.2}", quote.day_low, quote.day_high),
        ),
        row("Prev Close", &format!("${:.2}", quote.previous_close)),
        row("Volume", &format_volume(quote.volume)),
        row("Market Cap", &format_market_cap(quote.market_cap)),
    ];

    if quote.has_year_range() {
        lines.push(row(
            "52 Week Range",
            &format!(
                "${:.2} - ${:.2}",
                quote.fifty_two_week_low, quote.fifty_two_week_high
            ),
        ));
    }

    if let Some(summary) = history_summary(&quote.historical_prices) {
        lines.push(row("History", &summary));
    }

    lines
}

/// Print the quote card to stdout.
pub fn print_quote_card(quote: &StockQuote) {
    println!();
    for line in format_quote_card(quote) {
        println!("{}", line);
    }
    println!();
}
