//! Simulation lifecycle: build the gate and pool, launch the users, wait for
//! all of them at the join barrier, then summarize.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::booking::BookingRecord;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::gate::AdmissionGate;
use crate::pool::ShowPool;
use crate::report::{summarize, Report};
use crate::selection::ShowPicker;
use crate::user::UserWorker;

/// The runtime orchestrator for one booking simulation.
///
/// `Simulation` is responsible for:
/// - **Construction**: building the admission gate and the show pool before
///   any worker exists. Construction failures are fatal and pre-empt every
///   launch.
/// - **Execution**: launching one Tokio task per user and collecting every
///   outcome at a full join barrier.
/// - **Reporting**: reading final show state only after that barrier.
///
/// # Example
///
/// ```no_run
/// use box_office::config::SimConfig;
/// use box_office::sim::Simulation;
///
/// # async fn demo() -> Result<(), box_office::error::SimError> {
/// let config = SimConfig::new(10, 5, 3)?;
/// let report = Simulation::new(config)?.run().await?;
/// println!("booked {} of {}", report.total_booked, report.total_initial);
/// # Ok(())
/// # }
/// ```
pub struct Simulation {
    config: SimConfig,
    gate: Arc<AdmissionGate>,
    pool: Arc<ShowPool>,
    picker: ShowPicker,
}

impl Simulation {
    /// Builds the synchronization primitives and the show pool.
    ///
    /// # Errors
    /// [`SimError::InvalidConfig`] or [`SimError::ResourceInit`]; in either
    /// case no task has been spawned and no booking attempted.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let gate = AdmissionGate::new(config.concurrent_limit)?;
        let pool = Arc::new(ShowPool::build(config.shows, config.tickets_per_show)?);
        info!(
            users = config.users,
            shows = config.shows,
            tickets_per_show = config.tickets_per_show,
            concurrent_limit = config.concurrent_limit,
            "simulation initialized"
        );
        Ok(Self {
            config,
            gate,
            pool,
            picker: ShowPicker::uniform(),
        })
    }

    /// Replaces the default entropy-seeded picker, e.g. with
    /// [`ShowPicker::scripted`] for reproducible per-show totals.
    pub fn with_picker(mut self, picker: ShowPicker) -> Self {
        self.picker = picker;
        self
    }

    /// Runs the simulation to completion and returns the report.
    ///
    /// Each user's target is drawn before its task launches; each task
    /// performs exactly one booking operation. The method then awaits every
    /// task handle, in launch order. This is the one hard ordering point in
    /// the system: reporting happens-after all user terminations.
    ///
    /// # Errors
    /// [`SimError::TaskFailed`] if a worker panicked, plus anything a worker
    /// itself surfaced (an out-of-range target, which the picker makes
    /// impossible in practice).
    pub async fn run(mut self) -> Result<Report, SimError> {
        let shows = self.pool.len();
        let mut handles = Vec::with_capacity(self.config.users as usize);

        for user_id in 1..=self.config.users {
            let worker = UserWorker::new(user_id, self.picker.next_target(shows));
            let gate = Arc::clone(&self.gate);
            let pool = Arc::clone(&self.pool);
            handles.push(tokio::spawn(worker.run(gate, pool)));

            if let Some(interval) = self.config.arrival_interval {
                tokio::time::sleep(interval).await;
            }
        }
        debug!(users = handles.len(), "all users launched");

        // Join barrier: no show state is read until every worker is done.
        let mut outcomes: Vec<BookingRecord> = Vec::with_capacity(handles.len());
        for handle in handles {
            let record = handle.await.map_err(|e| {
                error!(error = %e, "user task failed");
                SimError::TaskFailed(e.to_string())
            })??;
            outcomes.push(record);
        }

        let report = summarize(&self.pool, outcomes).await;
        info!(
            booked = report.total_booked,
            remaining = report.total_remaining,
            peak_in_flight = self.gate.high_water(),
            "simulation complete"
        );
        Ok(report)
    }

    /// Handle to the admission gate, usable after [`run`](Simulation::run)
    /// consumes the simulation, e.g. to inspect the in-flight high-water
    /// mark against the configured limit.
    pub fn gate_handle(&self) -> Arc<AdmissionGate> {
        Arc::clone(&self.gate)
    }
}

/// Convenience entry point: validate nothing further, build, and run.
///
/// This is the core's whole surface for the thin CLI: `Ok(Report)` or one of
/// the fatal [`SimError`] kinds.
pub async fn run(config: SimConfig) -> Result<Report, SimError> {
    Simulation::new(config)?.run().await
}
