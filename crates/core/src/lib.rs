//! # Reclaim Core
//!
//! Business services for the Reclaim ROI engine.
//!
//! This crate contains:
//! - The hourly-value resolver and its static wage knowledge base
//! - The ROI calculator and the reporting service over repository ports
//! - Environment-based billing configuration loading
//!
//! Both calculation paths are pure, synchronous and side-effect free; they
//! may be invoked concurrently without coordination. The only shared state
//! is the wage knowledge base, built once and never mutated.

pub mod config;
pub mod hourly_value;
pub mod roi;

pub use hourly_value::{HourlyValueResolver, WageKnowledgeBase};
pub use roi::{RoiCalculator, RoiService};
