//! Data provider trait and structured error types.

use chrono::{Duration, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::{Bar, Quote};

/// Structured errors for data operations, displayable in both the CLI
/// and the TUI error banner.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("no bars returned for {symbol} between {start} and {end}")]
    EmptyHistory {
        symbol: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("data error: {0}")]
    Other(String),
}

impl DataError {
    /// Coarse category tag used by the TUI error history.
    pub fn category(&self) -> &'static str {
        match self {
            DataError::NetworkUnreachable(_) | DataError::RateLimited { .. } => "NET",
            _ => "DATA",
        }
    }
}

/// Trait for quote sources.
///
/// `fetch_history` is the required primitive; `fetch_latest` defaults to
/// a short-window history fetch wide enough to straddle weekends and
/// holidays, taking the last bar as the quote.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily bars for a symbol over an inclusive date range,
    /// oldest first.
    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError>;

    /// Fetch the most recent daily close for a symbol.
    fn fetch_latest(&self, symbol: &str) -> Result<Quote, DataError> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(7);
        let bars = self.fetch_history(symbol, start, end)?;
        Quote::from_last_bar(symbol, &bars).ok_or_else(|| DataError::EmptyHistory {
            symbol: symbol.to_string(),
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneBarProvider;

    impl QuoteProvider for OneBarProvider {
        fn name(&self) -> &str {
            "one_bar"
        }

        fn fetch_history(
            &self,
            _symbol: &str,
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Bar>, DataError> {
            Ok(vec![Bar {
                date: start,
                open: 20.0,
                high: 21.0,
                low: 19.5,
                close: 20.5,
                volume: 10,
                adj_close: 20.5,
            }])
        }
    }

    struct EmptyProvider;

    impl QuoteProvider for EmptyProvider {
        fn name(&self) -> &str {
            "empty"
        }

        fn fetch_history(
            &self,
            _symbol: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Bar>, DataError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn default_fetch_latest_uses_last_bar() {
        let quote = OneBarProvider.fetch_latest("^VIX").unwrap();
        assert_eq!(quote.symbol, "^VIX");
        assert_eq!(quote.price, 20.5);
    }

    #[test]
    fn default_fetch_latest_maps_empty_to_error() {
        let err = EmptyProvider.fetch_latest("^VIX").unwrap_err();
        assert!(matches!(err, DataError::EmptyHistory { .. }));
    }

    #[test]
    fn error_categories() {
        assert_eq!(DataError::NetworkUnreachable("x".into()).category(), "NET");
        assert_eq!(
            DataError::RateLimited {
                retry_after_secs: 5
            }
            .category(),
            "NET"
        );
        assert_eq!(
            DataError::SymbolNotFound {
                symbol: "X".into()
            }
            .category(),
            "DATA"
        );
    }
}
