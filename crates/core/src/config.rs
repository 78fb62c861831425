//! Billing configuration loader
//!
//! Reads the default VA billing rate from the environment. In keeping with
//! the engine's never-fail policy, loading cannot error: a missing or
//! invalid value falls back to the built-in default with a warning.
//!
//! ## Environment Variables
//! - `RECLAIM_VA_HOURLY_RATE`: default VA billing rate in dollars/hour

use reclaim_domain::BillingConfig;

/// Environment variable holding the VA billing rate
pub const ENV_VA_HOURLY_RATE: &str = "RECLAIM_VA_HOURLY_RATE";

/// Load billing configuration from the environment
#[must_use]
pub fn load_billing_config() -> BillingConfig {
    match std::env::var(ENV_VA_HOURLY_RATE) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(rate) if rate > 0.0 => BillingConfig { va_hourly_rate: rate },
            _ => {
                tracing::warn!(value = %raw, "Invalid VA hourly rate, using default");
                BillingConfig::default()
            }
        },
        Err(_) => {
            tracing::debug!("No VA hourly rate configured, using default");
            BillingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env var is never touched concurrently
    #[test]
    fn test_load_billing_config() {
        std::env::remove_var(ENV_VA_HOURLY_RATE);
        assert!((load_billing_config().va_hourly_rate - 60.0).abs() < f64::EPSILON);

        std::env::set_var(ENV_VA_HOURLY_RATE, "72.5");
        assert!((load_billing_config().va_hourly_rate - 72.5).abs() < f64::EPSILON);

        std::env::set_var(ENV_VA_HOURLY_RATE, "not-a-rate");
        assert!((load_billing_config().va_hourly_rate - 60.0).abs() < f64::EPSILON);

        std::env::set_var(ENV_VA_HOURLY_RATE, "-5");
        assert!((load_billing_config().va_hourly_rate - 60.0).abs() < f64::EPSILON);

        std::env::remove_var(ENV_VA_HOURLY_RATE);
    }
}
