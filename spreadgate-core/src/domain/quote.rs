//! Quote — the most recent close for one instrument.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Bar;

/// Latest daily close for a symbol, stamped with the trading date it
/// belongs to (not the wall-clock time of the fetch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub date: NaiveDate,
}

impl Quote {
    /// Take the last bar of a history as the current quote.
    /// Returns `None` on an empty history.
    pub fn from_last_bar(symbol: &str, bars: &[Bar]) -> Option<Self> {
        bars.last().map(|bar| Self {
            symbol: symbol.to_string(),
            price: bar.close,
            date: bar.date,
        })
    }
}
