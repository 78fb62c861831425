//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Hourly-value defaults
/// Conservative hourly value used when a client has neither a calculated
/// value nor a manual override (dollars/hour).
pub const DEFAULT_HOURLY_VALUE: f64 = 50.0;
/// Default VA billing rate when no configuration is present (dollars/hour).
pub const DEFAULT_VA_HOURLY_RATE: f64 = 60.0;
/// Calculated hourly values are rounded to the nearest multiple of this step.
pub const RATE_ROUNDING_STEP: f64 = 5.0;

// Timeframe projection constants
//
// Monthly and yearly figures use fixed approximations rather than calendar
// arithmetic so that reports for the same timeframe are always comparable.
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const WEEKS_PER_YEAR: f64 = 52.0;

// Time-log bounds (enforced by upstream validation, not by this engine)
pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;

// Invoicing and reporting
pub const INVOICE_NUMBER_PREFIX: &str = "INV";
/// Window used for report periods without explicit bounds (days).
pub const DEFAULT_REPORT_WINDOW_DAYS: i64 = 30;
