//! Signal decider — GREEN / WAITING / RED from the filter pass-count and
//! the local clock. Re-derived from scratch each refresh; there is no
//! transition history.

use serde::{Deserialize, Serialize};

use crate::calendar::LocalClock;
use crate::config::DashboardConfig;
use crate::filters::FILTER_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalState {
    Green,
    Waiting,
    Red,
}

impl SignalState {
    pub fn label(self) -> &'static str {
        match self {
            SignalState::Green => "GREEN",
            SignalState::Waiting => "WAITING",
            SignalState::Red => "RED",
        }
    }
}

/// Classify the current state.
///
/// GREEN requires a full pass-count during the entry hour and holds for
/// the whole hour. WAITING only covers the first `waiting_cutoff_minute`
/// minutes of that hour: with an incomplete filter set at minute 30-59
/// the state is RED, not WAITING. That asymmetry is deliberate and is
/// pinned by `waiting_window_is_narrower_than_green_window` in the
/// integration tests; do not "fix" it without changing those.
pub fn decide(pass_count: u32, clock: LocalClock, config: &DashboardConfig) -> SignalState {
    if pass_count == FILTER_COUNT as u32 && clock.hour == config.entry_hour {
        SignalState::Green
    } else if clock.hour == config.entry_hour && clock.minute < config.waiting_cutoff_minute {
        SignalState::Waiting
    } else {
        SignalState::Red
    }
}
