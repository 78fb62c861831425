//! Client records
//!
//! Clients are persisted by an external store; this crate only defines the
//! shape the engine reads. The engine never writes a client back.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::constants::DEFAULT_HOURLY_VALUE;
use crate::types::wage::{ConfidenceLevel, HourlyValueResult};

/// A client engaging VA staffing services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Client {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Job title as entered at registration
    pub job_title: String,

    /// US state or region, if known
    pub location_state: Option<String>,

    /// Company revenue bracket label (ownership titles)
    pub company_revenue_range: Option<String>,

    /// Years of professional experience
    pub experience_years: Option<u32>,

    /// System-calculated hourly value, set at registration and recomputed
    /// on demand after profile edits
    pub calculated_hourly_value: Option<f64>,

    /// Administrator-entered override; takes precedence over the
    /// calculated value when present
    pub hourly_value_override: Option<f64>,

    /// Client-declared hours/week spent on admin work before delegating
    pub baseline_admin_hours_per_week: f64,

    /// Citation of the wage data behind the calculated value
    pub data_source: Option<String>,

    /// Confidence classification of the calculated value
    pub confidence_level: Option<ConfidenceLevel>,
}

impl Client {
    /// The rate actually used in ROI math
    ///
    /// Override if present, else the calculated value; when both are absent
    /// or non-positive, a conservative system default applies.
    #[must_use]
    pub fn effective_hourly_value(&self) -> f64 {
        self.hourly_value_override
            .filter(|v| *v > 0.0)
            .or_else(|| self.calculated_hourly_value.filter(|v| *v > 0.0))
            .unwrap_or(DEFAULT_HOURLY_VALUE)
    }

    /// Whether the effective value comes from a manual override
    #[must_use]
    pub fn has_override(&self) -> bool {
        self.hourly_value_override.is_some_and(|v| v > 0.0)
    }

    /// Stamp a freshly resolved hourly value onto this record
    ///
    /// Updates the calculated value and its provenance; never touches the
    /// manual override, which is managed independently by an administrator.
    pub fn apply_hourly_value(&mut self, result: &HourlyValueResult) {
        self.calculated_hourly_value = Some(result.calculated_hourly_value);
        self.data_source = Some(result.data_source.clone());
        self.confidence_level = Some(result.confidence_level);
    }
}
