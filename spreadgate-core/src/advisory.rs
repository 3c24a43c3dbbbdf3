//! Credit advisory — the manual fifth factor.
//!
//! Separate from the four filters: the operator types the quoted
//! $5-wide spread credit into the sidebar and gets a three-tier verdict
//! back. Nothing here feeds the signal decider.

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;

/// Dollar profit per point of credit when targeting half of max profit
/// on a standard 100-multiplier contract.
pub const PROFIT_TARGET_MULTIPLIER: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CreditAdvisory {
    /// Credit clears the entry threshold; `target_profit` is the
    /// half-max take-profit in dollars.
    Ok { target_profit: f64 },
    /// Below the entry threshold but still workable with a narrower
    /// spread.
    LowCredit,
    /// Not worth entering.
    TooLow,
}

/// Clamp a credit quote to the widget's range.
pub fn clamp_credit(credit: f64) -> f64 {
    credit.clamp(0.0, 1.0)
}

/// Tier a credit quote. Both thresholds are inclusive on the low side:
/// exactly `credit_ok` is OK, exactly `credit_min` is LowCredit.
pub fn evaluate_credit(credit: f64, config: &DashboardConfig) -> CreditAdvisory {
    if credit >= config.credit_ok {
        CreditAdvisory::Ok {
            target_profit: credit * PROFIT_TARGET_MULTIPLIER,
        }
    } else if credit >= config.credit_min {
        CreditAdvisory::LowCredit
    } else {
        CreditAdvisory::TooLow
    }
}
