//! User workers: one concurrent task per simulated user.

use std::sync::Arc;

use tracing::debug;

use crate::booking::{book, BookingRecord};
use crate::error::SimError;
use crate::gate::AdmissionGate;
use crate::pool::ShowPool;

/// One simulated user: a transient worker that performs exactly one booking
/// attempt against a target chosen before launch.
///
/// Workers never talk to each other; all coordination goes through the
/// admission gate and the target show's mutex. A worker terminates
/// unconditionally after its single attempt: there is no retry on sold-out.
#[derive(Debug, Clone, Copy)]
pub struct UserWorker {
    pub id: u32,
    pub target: u32,
}

impl UserWorker {
    pub fn new(id: u32, target: u32) -> Self {
        Self { id, target }
    }

    /// Runs the worker's single booking operation and emits its record.
    pub async fn run(
        self,
        gate: Arc<AdmissionGate>,
        pool: Arc<ShowPool>,
    ) -> Result<BookingRecord, SimError> {
        debug!(user_id = self.id, target = self.target, "user started");
        let record = book(&gate, &pool, self.id, self.target).await?;
        debug!(user_id = self.id, outcome = ?record.outcome, "user finished");
        Ok(record)
    }
}
