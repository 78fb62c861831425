//! ROI service - orchestration over repository ports

use std::sync::Arc;

use reclaim_common::period::DateRange;
use reclaim_domain::{Result, RoiResult, Timeframe};
use uuid::Uuid;

use super::calculator::RoiCalculator;
use super::ports::{ClientRepository, TimeLogRepository};

/// Service assembling ROI views for dashboards, reports and invoices
///
/// Fetches the client and the in-scope time logs through ports and hands
/// them to the pure calculator. The date range comes from the caller, who
/// owns the reporting scope.
pub struct RoiService {
    clients: Arc<dyn ClientRepository>,
    time_logs: Arc<dyn TimeLogRepository>,
    calculator: RoiCalculator,
}

impl RoiService {
    /// Create a new ROI service
    #[must_use]
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        time_logs: Arc<dyn TimeLogRepository>,
        calculator: RoiCalculator,
    ) -> Self {
        Self { clients, time_logs, calculator }
    }

    /// Compute the ROI view for one client over a timeframe
    ///
    /// # Errors
    /// Returns an error when the client cannot be found or a repository
    /// read fails; the calculation itself cannot fail.
    pub async fn roi_for_client(
        &self,
        client_id: Uuid,
        timeframe: Timeframe,
        range: DateRange,
    ) -> Result<RoiResult> {
        let client = self.clients.get_client(client_id).await?;
        let entries = self.time_logs.entries_for_client(client_id, range).await?;
        Ok(self.calculator.calculate(&client, &entries, timeframe))
    }
}
