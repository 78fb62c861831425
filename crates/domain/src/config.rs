//! Configuration structures
//!
//! Pure config data types; environment loading lives in `reclaim-core`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VA_HOURLY_RATE;

/// Billing configuration for ROI calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Default VA billing rate in dollars per hour
    pub va_hourly_rate: f64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self { va_hourly_rate: DEFAULT_VA_HOURLY_RATE }
    }
}
