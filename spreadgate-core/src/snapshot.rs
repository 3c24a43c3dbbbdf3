//! Snapshot builder — one refresh, one pass: fetch, compute, classify.
//!
//! This is the single entry point both front ends call. Inputs go in
//! (provider, config, clock), a renderable state tree comes out. Nothing
//! is cached and nothing global is read, so a snapshot is exactly as
//! fresh as the clock it was built with.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{LocalClock, TradingCalendar};
use crate::config::DashboardConfig;
use crate::data::{DataError, QuoteProvider};
use crate::domain::Quote;
use crate::filters::{self, FilterInputs, FilterSet};
use crate::indicators::Sma;
use crate::signal::{self, SignalState};

/// Derived-value failures, kept separate from provider faults so the
/// front ends can word them differently.
#[derive(Debug, Error)]
pub enum ComputationError {
    #[error("insufficient history: got {got} bars, need {need} for the moving average")]
    InsufficientHistory { got: usize, need: usize },
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl SnapshotError {
    /// Coarse category tag for the TUI error history.
    pub fn category(&self) -> &'static str {
        match self {
            SnapshotError::Data(e) => e.category(),
            SnapshotError::Computation(_) => "CALC",
        }
    }
}

/// Everything one refresh produced, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub index_quote: Quote,
    pub moving_average: f64,
    pub vix_quote: Quote,
    pub holiday: bool,
    pub filters: FilterSet,
    pub signal: SignalState,
    /// The clock the decider saw; also what "last updated" displays.
    pub clock: LocalClock,
}

impl Snapshot {
    /// Run the full pass: fetch the index history and the volatility
    /// quote, derive the moving average, evaluate the filters, classify
    /// the signal.
    pub fn build(
        provider: &dyn QuoteProvider,
        config: &DashboardConfig,
        calendar: &TradingCalendar,
        clock: LocalClock,
    ) -> Result<Self, SnapshotError> {
        let end = clock.date;
        let start = end - Duration::days(config.lookback_days);
        let bars = provider.fetch_history(&config.index_symbol, start, end)?;

        let moving_average = Sma::new(config.ma_window).latest(&bars).ok_or(
            ComputationError::InsufficientHistory {
                got: bars.len(),
                need: config.ma_window,
            },
        )?;

        // A non-empty history is guaranteed here: the SMA needed at
        // least `ma_window` bars.
        let index_quote = Quote::from_last_bar(&config.index_symbol, &bars).ok_or_else(|| {
            DataError::EmptyHistory {
                symbol: config.index_symbol.clone(),
                start,
                end,
            }
        })?;

        let vix_quote = provider.fetch_latest(&config.volatility_symbol)?;

        let holiday = calendar.is_holiday(clock.date);
        let filters = filters::evaluate(&FilterInputs {
            index_price: index_quote.price,
            moving_average,
            vix_price: vix_quote.price,
            today: clock.date,
            calendar,
            config,
        });
        let signal = signal::decide(filters.pass_count(), clock, config);

        Ok(Self {
            index_quote,
            moving_average,
            vix_quote,
            holiday,
            filters,
            signal,
            clock,
        })
    }

    /// Signed distance of the index price from its moving average.
    pub fn price_delta(&self) -> f64 {
        self.index_quote.price - self.moving_average
    }

    /// Signed room left under the volatility cap (negative when over).
    pub fn vix_headroom(&self, vix_cap: f64) -> f64 {
        vix_cap - self.vix_quote.price
    }

    pub fn pass_count(&self) -> u32 {
        self.filters.pass_count()
    }
}
