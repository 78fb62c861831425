//! ROI reporting types
//!
//! [`RoiResult`] is a computed view, never persisted as authoritative:
//! every numeric field is a deterministic function of the inputs, so it can
//! always be recomputed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{WEEKS_PER_MONTH, WEEKS_PER_YEAR};

/// Reporting timeframe for ROI projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Timeframe {
    Weekly,
    Monthly,
    Yearly,
}

impl Timeframe {
    /// Number of weeks the baseline is projected over
    ///
    /// Monthly uses 4.33 (average weeks/month) and yearly uses 52. These
    /// are fixed approximations rather than calendar computations so that
    /// figures for the same timeframe are always comparable across reports.
    #[must_use]
    pub const fn weeks(self) -> f64 {
        match self {
            Self::Weekly => 1.0,
            Self::Monthly => WEEKS_PER_MONTH,
            Self::Yearly => WEEKS_PER_YEAR,
        }
    }

    /// Lowercase label as used in serialized payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Computed ROI summary for one client over one timeframe
///
/// Monetary and hour fields are rounded to 2 decimal places for display;
/// internal computation runs at full floating-point precision first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RoiResult {
    /// Timeframe the figures are projected over
    pub timeframe: Timeframe,

    /// Effective hourly value used for the client
    pub client_hourly_value: f64,

    /// Baseline admin hours projected over the timeframe
    pub hours_reclaimed: f64,

    /// Dollar value of the reclaimed hours
    pub value_of_reclaimed_time: f64,

    /// Total VA hours across the supplied time-log entries
    pub va_hours_worked: f64,

    /// Cost of the VA hours at the configured billing rate
    pub va_cost: f64,

    /// `value_of_reclaimed_time - va_cost`; negative when VA cost exceeds
    /// the reclaimed value
    pub net_savings: f64,

    /// `net_savings / va_cost * 100`, or 0 when no VA cost accrued
    pub roi_percentage: f64,

    /// Citations for the data behind the numbers
    pub data_sources: Vec<String>,

    /// When this view was computed
    pub calculation_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weeks_per_timeframe() {
        assert!((Timeframe::Weekly.weeks() - 1.0).abs() < f64::EPSILON);
        assert!((Timeframe::Monthly.weeks() - 4.33).abs() < f64::EPSILON);
        assert!((Timeframe::Yearly.weeks() - 52.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timeframe_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Timeframe::Monthly).unwrap(), "\"monthly\"");
        let parsed: Timeframe = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(parsed, Timeframe::Yearly);
    }
}
