//! Pure numeric rounding helpers
//!
//! Display rounding for rates and monetary amounts. All functions round
//! half away from zero, which for the positive values this system deals in
//! behaves as round-half-up.

/// Round a value to the nearest multiple of `step`.
///
/// # Examples
///
/// ```
/// use reclaim_common::rounding::round_to_step;
///
/// assert_eq!(round_to_step(52.0, 5.0), 50.0);
/// assert_eq!(round_to_step(52.5, 5.0), 55.0);
/// assert_eq!(round_to_step(100.0, 5.0), 100.0);
/// ```
#[must_use]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Round an hourly rate to the nearest multiple of $5.
///
/// # Examples
///
/// ```
/// use reclaim_common::rounding::round_to_nearest_five;
///
/// assert_eq!(round_to_nearest_five(47.5), 50.0);
/// assert_eq!(round_to_nearest_five(52.0), 50.0);
/// assert_eq!(round_to_nearest_five(103.0), 105.0);
/// ```
#[must_use]
pub fn round_to_nearest_five(value: f64) -> f64 {
    round_to_step(value, 5.0)
}

/// Round a monetary or hour figure to 2 decimal places for display.
///
/// # Examples
///
/// ```
/// use reclaim_common::rounding::round_currency;
///
/// assert_eq!(round_currency(3377.399_999_9), 3377.4);
/// assert_eq!(round_currency(40.726), 40.73);
/// ```
#[must_use]
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
