//! Trading calendar — wall clock in a fixed zone plus the holiday set.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A wall-clock reading in the calendar's zone, broken into the pieces
/// the decider and the display need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalClock {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

/// Fixed-zone clock and exact-date holiday membership.
///
/// Holiday matching is exact set membership on the zone's local date.
/// There are no recurring rules; the set covers one calendar year and is
/// supplied by the config.
#[derive(Debug, Clone)]
pub struct TradingCalendar {
    zone: Tz,
    holidays: BTreeSet<NaiveDate>,
}

impl TradingCalendar {
    pub fn new(zone: Tz, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            zone,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Current wall clock in the calendar's zone.
    pub fn now(&self) -> LocalClock {
        self.clock_at(Utc::now())
    }

    /// Convert an arbitrary instant into this calendar's local clock.
    pub fn clock_at(&self, instant: DateTime<Utc>) -> LocalClock {
        let local = instant.with_timezone(&self.zone);
        LocalClock {
            date: local.date_naive(),
            hour: local.hour(),
            minute: local.minute(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Holidays in ascending date order.
    pub fn holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holidays.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn calendar() -> TradingCalendar {
        TradingCalendar::new(
            chrono_tz::Asia::Singapore,
            [
                NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
            ],
        )
    }

    #[test]
    fn holiday_membership_is_exact() {
        let cal = calendar();
        assert!(cal.is_holiday(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()));
        assert!(!cal.is_holiday(NaiveDate::from_ymd_opt(2025, 7, 3).unwrap()));
        assert!(!cal.is_holiday(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()));
    }

    #[test]
    fn utc_converts_to_singapore_evening() {
        // 15:05 UTC is 23:05 in Singapore (UTC+8, no DST).
        let cal = calendar();
        let instant = Utc.with_ymd_and_hms(2025, 3, 3, 15, 5, 0).unwrap();
        let clock = cal.clock_at(instant);
        assert_eq!(clock.hour, 23);
        assert_eq!(clock.minute, 5);
        assert_eq!(clock.date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    }

    #[test]
    fn local_date_rolls_over_before_utc() {
        // 16:30 UTC is already 00:30 the next day in Singapore.
        let cal = calendar();
        let instant = Utc.with_ymd_and_hms(2025, 3, 3, 16, 30, 0).unwrap();
        let clock = cal.clock_at(instant);
        assert_eq!(clock.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(clock.hour, 0);
        assert_eq!(clock.minute, 30);
    }

    #[test]
    fn holidays_iterate_in_order() {
        let cal = calendar();
        let dates: Vec<_> = cal.holidays().collect();
        assert_eq!(dates.len(), 2);
        assert!(dates[0] < dates[1]);
    }
}
