//! Mock repository implementations for testing
//!
//! In-memory mocks for the ROI reporting ports, enabling deterministic
//! integration tests without a database.

use std::sync::Arc;

use async_trait::async_trait;
use reclaim_common::period::DateRange;
use reclaim_core::roi::ports::{ClientRepository, TimeLogRepository};
use reclaim_domain::{Client, ReclaimError, Result as DomainResult, TimeLogEntry};
use uuid::Uuid;

/// In-memory mock for `ClientRepository`.
#[derive(Default, Clone)]
pub struct MockClientRepository {
    clients: Arc<Vec<Client>>,
}

impl MockClientRepository {
    /// Create a new mock seeded with the provided clients.
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients: Arc::new(clients) }
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn get_client(&self, id: Uuid) -> DomainResult<Client> {
        self.clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ReclaimError::NotFound(format!("client {id}")))
    }
}

/// In-memory mock for `TimeLogRepository`.
///
/// Filters entries by client and date range, the way a real store would.
#[derive(Default, Clone)]
pub struct MockTimeLogRepository {
    entries: Arc<Vec<TimeLogEntry>>,
}

impl MockTimeLogRepository {
    /// Create a new mock seeded with the provided entries.
    pub fn new(entries: Vec<TimeLogEntry>) -> Self {
        Self { entries: Arc::new(entries) }
    }
}

#[async_trait]
impl TimeLogRepository for MockTimeLogRepository {
    async fn entries_for_client(
        &self,
        client_id: Uuid,
        range: DateRange,
    ) -> DomainResult<Vec<TimeLogEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.client_id == client_id)
            .filter(|e| {
                let date = e.date;
                date >= range.start.date_naive() && date <= range.end.date_naive()
            })
            .cloned()
            .collect())
    }
}
