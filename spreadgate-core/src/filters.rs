//! The four entry filters, each evaluated independently per refresh.
//!
//! Filters are pure: they read only the inputs snapshot handed to them.
//! There is no short-circuiting and no ordering dependency between them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::TradingCalendar;
use crate::config::DashboardConfig;

/// Number of filters in a set. The signal decider requires all of them
/// to pass before it can go GREEN.
pub const FILTER_COUNT: usize = 4;

/// How a filter row is rendered. `Manual` marks the credit placeholder,
/// which is always shown amber regardless of its boolean value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterDisplay {
    Pass,
    Fail,
    Manual,
}

/// One evaluated filter row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    pub label: String,
    pub passed: bool,
    pub display: FilterDisplay,
}

impl Filter {
    fn checked(label: String, passed: bool) -> Self {
        let display = if passed {
            FilterDisplay::Pass
        } else {
            FilterDisplay::Fail
        };
        Self {
            label,
            passed,
            display,
        }
    }

    fn manual(label: String, passed: bool) -> Self {
        Self {
            label,
            passed,
            display: FilterDisplay::Manual,
        }
    }
}

/// Everything the evaluator reads. Built fresh each refresh; nothing in
/// here survives across refreshes.
#[derive(Debug)]
pub struct FilterInputs<'a> {
    pub index_price: f64,
    pub moving_average: f64,
    pub vix_price: f64,
    pub today: NaiveDate,
    pub calendar: &'a TradingCalendar,
    pub config: &'a DashboardConfig,
}

/// The four filters in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSet {
    pub filters: [Filter; FILTER_COUNT],
}

impl FilterSet {
    pub fn pass_count(&self) -> u32 {
        self.filters.iter().filter(|f| f.passed).count() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn all_passed(&self) -> bool {
        self.pass_count() == FILTER_COUNT as u32
    }
}

/// Evaluate all four filters against one inputs snapshot.
///
/// - Trend: index price at or above its trailing moving average
///   (equal passes).
/// - Volatility: VIX close at or below the cap (exactly at the cap
///   passes).
/// - Credit: placeholder, always true until a brokerage feed supplies
///   the live quote; rendered MANUAL so the operator checks it by hand.
/// - Holiday: today must not be in the calendar's holiday set.
pub fn evaluate(inputs: &FilterInputs) -> FilterSet {
    let config = inputs.config;

    let trend = Filter::checked(
        format!(
            "{} >= {}-day MA",
            config.index_symbol, config.ma_window
        ),
        inputs.index_price >= inputs.moving_average,
    );

    let volatility = Filter::checked(
        format!("VIX <= {:.0}", config.vix_cap),
        inputs.vix_price <= config.vix_cap,
    );

    let credit = Filter::manual(format!("Credit >= ${:.2}", config.credit_ok), true);

    let holiday = Filter::checked(
        "No US holiday".into(),
        !inputs.calendar.is_holiday(inputs.today),
    );

    FilterSet {
        filters: [trend, volatility, credit, holiday],
    }
}
