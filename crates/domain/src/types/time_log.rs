//! VA time-log entries
//!
//! Entries are created and corrected by the time-log collaborator; the
//! engine treats them as immutable input. Range validation of
//! `hours_worked` (0 < h ≤ 24) happens upstream before entries reach the
//! engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

/// One logged block of VA work for a client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimeLogEntry {
    /// Unique identifier
    pub id: Uuid,

    /// The VA who performed the work
    pub va_id: Uuid,

    /// The client the work was performed for
    pub client_id: Uuid,

    /// Calendar date the work was performed
    pub date: NaiveDate,

    /// Hours worked on that date (upstream-validated to (0, 24])
    pub hours_worked: f64,

    /// Optional free-form notes
    pub notes: Option<String>,
}

/// Sum the hours across a set of entries
///
/// No date filtering is performed here; callers pass only entries already
/// scoped to the period they care about.
#[must_use]
pub fn total_hours(entries: &[TimeLogEntry]) -> f64 {
    entries.iter().map(|e| e.hours_worked).sum()
}
