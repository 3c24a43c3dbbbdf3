//! End-to-end snapshot scenarios against a canned provider.
//!
//! These pin the observable behavior of a full refresh: fetch, moving
//! average, filter verdicts, and the signal classification, including
//! the asymmetric WAITING/GREEN minute windows.

use chrono::NaiveDate;

use spreadgate_core::calendar::LocalClock;
use spreadgate_core::config::DashboardConfig;
use spreadgate_core::data::{DataError, QuoteProvider};
use spreadgate_core::domain::Bar;
use spreadgate_core::filters::FilterDisplay;
use spreadgate_core::signal::SignalState;
use spreadgate_core::snapshot::{Snapshot, SnapshotError};

/// Serves fixed histories per symbol; any other symbol errors.
struct CannedProvider {
    index_symbol: String,
    index_bars: Vec<Bar>,
    vix_bars: Vec<Bar>,
}

impl CannedProvider {
    fn new(index_closes: &[f64], vix_close: f64) -> Self {
        Self {
            index_symbol: "QQQ".into(),
            index_bars: make_bars(index_closes),
            vix_bars: make_bars(&[vix_close]),
        }
    }
}

impl QuoteProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError> {
        if symbol == self.index_symbol {
            Ok(self.index_bars.clone())
        } else if symbol == "^VIX" {
            Ok(self.vix_bars.clone())
        } else {
            Err(DataError::EmptyHistory {
                symbol: symbol.to_string(),
                start,
                end,
            })
        }
    }
}

/// A provider that fails every fetch.
struct DownProvider;

impl QuoteProvider for DownProvider {
    fn name(&self) -> &str {
        "down"
    }

    fn fetch_history(
        &self,
        _symbol: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError> {
        Err(DataError::NetworkUnreachable("connection refused".into()))
    }
}

fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            date: base_date + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000,
            adj_close: close,
        })
        .collect()
}

/// 60 closes whose last value is 450 and whose trailing 50-bar mean is
/// exactly 440. The 10 leading bars at 500 prove the window is trailing,
/// not whole-history.
fn index_closes() -> Vec<f64> {
    let mut closes = vec![500.0; 10];
    closes.extend(std::iter::repeat(430.0).take(25));
    closes.extend(std::iter::repeat(450.0).take(24));
    closes.push(450.0);
    closes
}

fn clock(hour: u32, minute: u32) -> LocalClock {
    LocalClock {
        date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        hour,
        minute,
    }
}

fn build(provider: &dyn QuoteProvider, clock: LocalClock) -> Result<Snapshot, SnapshotError> {
    let config = DashboardConfig::default();
    let calendar = config.calendar();
    Snapshot::build(provider, &config, &calendar, clock)
}

#[test]
fn clean_day_in_window_goes_green() {
    let provider = CannedProvider::new(&index_closes(), 18.0);
    let snapshot = build(&provider, clock(23, 5)).unwrap();

    assert_eq!(snapshot.index_quote.price, 450.0);
    assert_eq!(snapshot.moving_average, 440.0);
    assert_eq!(snapshot.price_delta(), 10.0);
    assert_eq!(snapshot.vix_quote.price, 18.0);
    assert_eq!(snapshot.vix_headroom(30.0), 12.0);
    assert!(!snapshot.holiday);
    assert_eq!(snapshot.pass_count(), 4);
    assert_eq!(snapshot.signal, SignalState::Green);
}

#[test]
fn clean_day_outside_window_is_red() {
    let provider = CannedProvider::new(&index_closes(), 18.0);
    let snapshot = build(&provider, clock(14, 0)).unwrap();

    // Filters unchanged, only the clock differs.
    assert_eq!(snapshot.pass_count(), 4);
    assert_eq!(snapshot.signal, SignalState::Red);
}

#[test]
fn high_vix_in_window_waits_before_the_cutoff() {
    let provider = CannedProvider::new(&index_closes(), 35.0);
    let snapshot = build(&provider, clock(23, 10)).unwrap();

    assert!(!snapshot.filters.filters[1].passed);
    assert_eq!(snapshot.pass_count(), 3);
    assert_eq!(snapshot.signal, SignalState::Waiting);
}

#[test]
fn waiting_window_is_narrower_than_green_window() {
    // At 23:45 an incomplete filter set is RED, while a complete one is
    // still GREEN. GREEN holds for the whole hour; WAITING does not.
    let high_vix = CannedProvider::new(&index_closes(), 35.0);
    let snapshot = build(&high_vix, clock(23, 45)).unwrap();
    assert_eq!(snapshot.pass_count(), 3);
    assert_eq!(snapshot.signal, SignalState::Red);

    let calm_vix = CannedProvider::new(&index_closes(), 18.0);
    let snapshot = build(&calm_vix, clock(23, 45)).unwrap();
    assert_eq!(snapshot.signal, SignalState::Green);
}

#[test]
fn holiday_blocks_green_even_in_window() {
    let provider = CannedProvider::new(&index_closes(), 18.0);
    let config = DashboardConfig::default();
    let calendar = config.calendar();
    let holiday_clock = LocalClock {
        date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
        hour: 23,
        minute: 5,
    };
    let snapshot = Snapshot::build(&provider, &config, &calendar, holiday_clock).unwrap();

    assert!(snapshot.holiday);
    assert!(!snapshot.filters.filters[3].passed);
    assert_eq!(snapshot.pass_count(), 3);
    assert_eq!(snapshot.signal, SignalState::Waiting);
}

#[test]
fn credit_row_renders_manual() {
    let provider = CannedProvider::new(&index_closes(), 18.0);
    let snapshot = build(&provider, clock(23, 5)).unwrap();
    assert_eq!(
        snapshot.filters.filters[2].display,
        FilterDisplay::Manual
    );
}

#[test]
fn short_history_is_an_explicit_error() {
    let provider = CannedProvider::new(&vec![450.0; 30], 18.0);
    let err = build(&provider, clock(23, 5)).unwrap_err();
    match err {
        SnapshotError::Computation(e) => {
            assert_eq!(
                e.to_string(),
                "insufficient history: got 30 bars, need 50 for the moving average"
            );
        }
        other => panic!("expected computation error, got: {other}"),
    }
}

#[test]
fn provider_outage_surfaces_as_data_error() {
    let err = build(&DownProvider, clock(23, 5)).unwrap_err();
    assert!(matches!(err, SnapshotError::Data(_)));
    assert_eq!(err.category(), "NET");
}
