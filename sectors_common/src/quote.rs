//! End-of-day quote model and its ordering.
//!
//! A `Quote` is decoded from the market-data API response and re-encoded,
//! unchanged, as the body of a destination upsert.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by quote records (`YYYY-MM-DD`).
pub const QUOTE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One daily price record for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol (e.g., `XLK`).
    pub symbol: String,
    /// Trading day as `YYYY-MM-DD`.
    pub date: String,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: i64,
    /// Absolute change versus the previous close.
    pub change: f64,
    /// Percentage change versus the previous close.
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
}

impl Quote {
    /// Calendar date of the quote, or `None` if `date` is not `YYYY-MM-DD`.
    pub fn trading_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, QUOTE_DATE_FORMAT).ok()
    }
}

/// Sort quotes newest first by calendar date.
///
/// The sort is stable; quotes with an unparseable date end up last.
pub fn sort_newest_first(quotes: &mut [Quote]) {
    quotes.sort_by_key(|q| std::cmp::Reverse(q.trading_day()));
}

#[cfg(test)]
pub(crate) fn quote_on(symbol: &str, date: &str) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        date: date.to_string(),
        open: 100.0,
        high: 101.0,
        low: 99.0,
        close: 100.5,
        volume: 1_000,
        change: 0.5,
        change_percent: 0.5,
    }
}
