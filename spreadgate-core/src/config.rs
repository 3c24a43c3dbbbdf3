//! Dashboard configuration — explicit and immutable once loaded.
//!
//! Every threshold the evaluator and decider consult lives here and is
//! passed in by value or reference; nothing reads ambient process state.
//! `Default` carries the compiled-in values; a TOML file may override any
//! subset of them.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::calendar::TradingCalendar;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All tunables for one dashboard instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Instrument whose price is compared against its own moving average.
    pub index_symbol: String,

    /// Volatility index quoted against `vix_cap`.
    pub volatility_symbol: String,

    /// Calendar days of history requested (roughly 3 months of daily bars).
    pub lookback_days: i64,

    /// Moving-average window in trading days.
    pub ma_window: usize,

    /// Volatility filter passes while the VIX close is at or below this.
    pub vix_cap: f64,

    /// Credit at or above this is a clean entry.
    pub credit_ok: f64,

    /// Credit at or above this (but below `credit_ok`) suggests a
    /// narrower spread; below it, skip.
    pub credit_min: f64,

    /// Initial value for the credit input widget.
    pub credit_default: f64,

    /// Local hour (0-23) of the entry window.
    pub entry_hour: u32,

    /// Within the entry hour, minutes before this show WAITING when the
    /// filters are incomplete.
    pub waiting_cutoff_minute: u32,

    /// IANA zone all clock reads use.
    pub timezone: Tz,

    /// Exact dates on which the holiday filter fails.
    pub holidays: Vec<NaiveDate>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            index_symbol: "QQQ".into(),
            volatility_symbol: "^VIX".into(),
            lookback_days: 92,
            ma_window: 50,
            vix_cap: 30.0,
            credit_ok: 0.24,
            credit_min: 0.18,
            credit_default: 0.27,
            entry_hour: 23,
            waiting_cutoff_minute: 30,
            timezone: chrono_tz::Asia::Singapore,
            holidays: us_market_holidays_2025(),
        }
    }
}

impl DashboardConfig {
    /// Load from a TOML file; missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string; missing keys fall back to the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the evaluator cannot run against.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ma_window < 1 {
            return Err(ConfigError::Invalid("ma_window must be >= 1".into()));
        }
        if self.lookback_days < 1 {
            return Err(ConfigError::Invalid("lookback_days must be >= 1".into()));
        }
        if self.entry_hour > 23 {
            return Err(ConfigError::Invalid(format!(
                "entry_hour must be 0-23, got {}",
                self.entry_hour
            )));
        }
        if self.waiting_cutoff_minute > 60 {
            return Err(ConfigError::Invalid(format!(
                "waiting_cutoff_minute must be 0-60, got {}",
                self.waiting_cutoff_minute
            )));
        }
        if self.credit_min > self.credit_ok {
            return Err(ConfigError::Invalid(format!(
                "credit_min ({}) must not exceed credit_ok ({})",
                self.credit_min, self.credit_ok
            )));
        }
        if self.vix_cap <= 0.0 {
            return Err(ConfigError::Invalid("vix_cap must be positive".into()));
        }
        Ok(())
    }

    /// Build the calendar this config describes.
    pub fn calendar(&self) -> TradingCalendar {
        TradingCalendar::new(self.timezone, self.holidays.iter().copied())
    }
}

/// US market holidays for calendar year 2025.
///
/// New Year's Day, MLK Day, Presidents' Day, Good Friday, Memorial Day,
/// Juneteenth, Independence Day, Labor Day, Thanksgiving, Christmas.
pub fn us_market_holidays_2025() -> Vec<NaiveDate> {
    [
        (1, 1),
        (1, 20),
        (2, 17),
        (4, 18),
        (5, 26),
        (6, 19),
        (7, 4),
        (9, 1),
        (11, 27),
        (12, 25),
    ]
    .iter()
    .map(|&(m, d)| NaiveDate::from_ymd_opt(2025, m, d).unwrap())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ma_window, 50);
        assert_eq!(config.entry_hour, 23);
        assert_eq!(config.holidays.len(), 10);
    }

    #[test]
    fn toml_overrides_subset() {
        let config = DashboardConfig::from_toml(
            r#"
            index_symbol = "SPY"
            vix_cap = 25.0
            "#,
        )
        .unwrap();
        assert_eq!(config.index_symbol, "SPY");
        assert_eq!(config.vix_cap, 25.0);
        // Untouched keys keep their defaults.
        assert_eq!(config.volatility_symbol, "^VIX");
        assert_eq!(config.ma_window, 50);
    }

    #[test]
    fn timezone_parses_from_iana_name() {
        let config = DashboardConfig::from_toml(r#"timezone = "US/Eastern""#).unwrap();
        assert_eq!(config.timezone, chrono_tz::US::Eastern);
    }

    #[test]
    fn bad_timezone_is_a_parse_error() {
        let err = DashboardConfig::from_toml(r#"timezone = "Mars/Olympus_Mons""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = DashboardConfig::from_toml("no_such_key = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn inverted_credit_thresholds_rejected() {
        let err = DashboardConfig::from_toml(
            r#"
            credit_min = 0.30
            credit_ok = 0.20
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_ma_window_rejected() {
        let err = DashboardConfig::from_toml("ma_window = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn holiday_list_is_sorted_and_in_2025() {
        use chrono::Datelike;
        let holidays = us_market_holidays_2025();
        assert!(holidays.windows(2).all(|w| w[0] < w[1]));
        assert!(holidays.iter().all(|d| d.year() == 2025));
    }
}
