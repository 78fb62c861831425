//! # Reclaim Common
//!
//! Pure foundation utilities shared across Reclaim crates.
//!
//! This crate contains:
//! - Numeric rounding helpers used by the ROI engine
//! - Invoice-number generation
//! - Report-period date-range resolution
//!
//! ## Architecture
//! - No dependencies on other Reclaim crates
//! - No I/O and no side effects beyond `generate_invoice_number`'s use of
//!   the thread-local RNG and the current clock

pub mod invoice;
pub mod period;
pub mod rounding;

pub use invoice::{generate_invoice_number, invoice_number_for};
pub use period::{report_range, DateRange, PeriodType};
pub use rounding::{round_currency, round_to_nearest_five, round_to_step};
