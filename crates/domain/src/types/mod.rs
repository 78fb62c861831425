//! Domain types and models
//!
//! Split by concern: wage-estimation types, client records, VA time logs,
//! and ROI reporting views. Types exported to TypeScript use ts-rs derives.

pub mod client;
pub mod roi;
pub mod time_log;
pub mod wage;

pub use client::Client;
pub use roi::{RoiResult, Timeframe};
pub use time_log::TimeLogEntry;
pub use wage::{
    ConfidenceLevel, ExperienceBracket, HourlyValueRequest, HourlyValueResult, LocationRates,
    RateBasis, RevenueTier, WageProfile,
};
