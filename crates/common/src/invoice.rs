//! Invoice-number generation
//!
//! Numbers follow `INV-{YYYY}{MM}-{NNNN}` where the suffix is a random
//! 4-digit integer. Collisions are possible here by design; the persistence
//! layer enforces uniqueness with a constraint and retries on conflict.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

/// Build an invoice number for a given month and suffix.
///
/// Pure companion to [`generate_invoice_number`]; the suffix is reduced
/// modulo 10 000 and zero-padded to 4 digits.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use reclaim_common::invoice::invoice_number_for;
///
/// let date = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
/// assert_eq!(invoice_number_for(date, 42), "INV-202506-0042");
/// ```
#[must_use]
pub fn invoice_number_for(date: DateTime<Utc>, suffix: u32) -> String {
    format!("INV-{}{:02}-{:04}", date.year(), date.month(), suffix % 10_000)
}

/// Generate an invoice number for the current month with a random suffix.
#[must_use]
pub fn generate_invoice_number() -> String {
    let suffix = rand::thread_rng().gen_range(0..10_000);
    invoice_number_for(Utc::now(), suffix)
}
