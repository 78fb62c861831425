//! Port interfaces for ROI reporting
//!
//! The engine never persists anything itself; these traits are the read
//! boundaries to the client record store and the time-log store.

use async_trait::async_trait;
use reclaim_common::period::DateRange;
use reclaim_domain::{Client, Result, TimeLogEntry};
use uuid::Uuid;

/// Read access to persisted client records
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Fetch a client by id
    async fn get_client(&self, id: Uuid) -> Result<Client>;
}

/// Read access to logged VA time
#[async_trait]
pub trait TimeLogRepository: Send + Sync {
    /// Fetch a client's time-log entries within a date range
    ///
    /// Implementations perform the scoping; the calculator does no
    /// filtering of its own.
    async fn entries_for_client(
        &self,
        client_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<TimeLogEntry>>;
}
