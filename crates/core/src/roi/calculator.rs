//! ROI calculator - core business logic
//!
//! Pure, deterministic and side-effect free: the same client, entries and
//! timeframe always produce the same figures. Input validation (baseline
//! hours > 0, entry hours in (0, 24]) is upstream's responsibility; this
//! calculator assumes well-formed input and never returns an error.

use chrono::{DateTime, Utc};
use reclaim_common::rounding::round_currency;
use reclaim_domain::time_log::total_hours;
use reclaim_domain::{BillingConfig, Client, RoiResult, TimeLogEntry, Timeframe};

/// Source tag recorded when the manual override drove the hourly value
const MANUAL_OVERRIDE_SOURCE: &str = "manual_override";

/// Computes ROI summaries from logged VA time
#[derive(Debug, Clone, Default)]
pub struct RoiCalculator {
    billing: BillingConfig,
}

impl RoiCalculator {
    /// Create a calculator with the given billing configuration
    #[must_use]
    pub const fn new(billing: BillingConfig) -> Self {
        Self { billing }
    }

    /// Compute ROI for a client over a timeframe, stamped with the current
    /// time
    #[must_use]
    pub fn calculate(
        &self,
        client: &Client,
        entries: &[TimeLogEntry],
        timeframe: Timeframe,
    ) -> RoiResult {
        self.calculate_at(client, entries, timeframe, Utc::now())
    }

    /// Compute ROI with an explicit calculation timestamp
    ///
    /// No date filtering happens here: callers pass only the entries in
    /// scope for the period they are reporting on. Hours reclaimed is the
    /// client's baseline projected over the timeframe, independent of how
    /// many VA hours were actually logged.
    #[must_use]
    pub fn calculate_at(
        &self,
        client: &Client,
        entries: &[TimeLogEntry],
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> RoiResult {
        let hourly_value = client.effective_hourly_value();
        let va_hours_worked = total_hours(entries);

        let hours_reclaimed = client.baseline_admin_hours_per_week * timeframe.weeks();
        let value_of_reclaimed_time = hours_reclaimed * hourly_value;
        let va_cost = va_hours_worked * self.billing.va_hourly_rate;
        let net_savings = value_of_reclaimed_time - va_cost;
        // Zero VA cost is a defined edge case (nothing logged yet), not an
        // error: report 0% instead of dividing by zero
        let roi_percentage =
            if va_cost > 0.0 { net_savings / va_cost * 100.0 } else { 0.0 };

        let mut data_sources: Vec<String> = client.data_source.iter().cloned().collect();
        if client.has_override() {
            data_sources.push(MANUAL_OVERRIDE_SOURCE.to_string());
        }

        tracing::debug!(
            client_id = %client.id,
            timeframe = timeframe.as_str(),
            va_hours_worked,
            net_savings,
            "calculated ROI"
        );

        RoiResult {
            timeframe,
            client_hourly_value: round_currency(hourly_value),
            hours_reclaimed: round_currency(hours_reclaimed),
            value_of_reclaimed_time: round_currency(value_of_reclaimed_time),
            va_hours_worked: round_currency(va_hours_worked),
            va_cost: round_currency(va_cost),
            net_savings: round_currency(net_savings),
            roi_percentage: round_currency(roi_percentage),
            data_sources,
            calculation_date: now,
        }
    }
}
