//! ROI calculation
//!
//! Converts a client's effective hourly value and logged VA time into the
//! savings figures shown on dashboards, reports and invoices.

pub mod calculator;
pub mod ports;
pub mod service;

pub use calculator::RoiCalculator;
pub use service::RoiService;
