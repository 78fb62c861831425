//! Report-period date ranges
//!
//! Resolves the time window a report or invoice covers. Weekly periods are
//! the trailing 7 days, monthly periods the trailing calendar month, and
//! anything else without explicit bounds the trailing 30 days.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Half-open time window `[start, end)` used to scope report queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive start of the window
    pub start: DateTime<Utc>,
    /// Exclusive end of the window
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Explicit range with caller-supplied bounds
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether a timestamp falls inside the window
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts < self.end
    }
}

/// Kind of reporting period being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Weekly,
    Monthly,
    /// Any other period type; without explicit bounds it defaults to the
    /// trailing 30 days
    Custom,
}

/// Resolve a reporting period into a concrete date range ending at `now`.
#[must_use]
pub fn report_range(period: PeriodType, now: DateTime<Utc>) -> DateRange {
    let start = match period {
        PeriodType::Weekly => now - Duration::days(7),
        // Calendar-month subtraction; clamps at the epoch boundary where
        // chrono cannot represent the result
        PeriodType::Monthly => now.checked_sub_months(Months::new(1)).unwrap_or(now),
        PeriodType::Custom => now - Duration::days(30),
    };
    DateRange::new(start, now)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_weekly_range_is_seven_days() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let range = report_range(PeriodType::Weekly, now);
        assert_eq!(range.end, now);
        assert_eq!(range.end - range.start, Duration::days(7));
    }

    #[test]
    fn test_monthly_range_subtracts_calendar_month() {
        let now = Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap();
        let range = report_range(PeriodType::Monthly, now);
        // February has no 31st; chrono clamps to the 28th
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap());
        assert_eq!(range.end, now);
    }

    #[test]
    fn test_custom_range_defaults_to_thirty_days() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let range = report_range(PeriodType::Custom, now);
        assert_eq!(range.end - range.start, Duration::days(30));
    }

    #[test]
    fn test_contains_is_half_open() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let range = report_range(PeriodType::Weekly, now);
        assert!(range.contains(range.start));
        assert!(range.contains(now - Duration::days(3)));
        assert!(!range.contains(now));
    }
}
