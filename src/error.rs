//! Error types for the booking simulator.

use thiserror::Error;

/// Errors that can abort a simulation run.
///
/// All variants are fatal and surface before or at the join barrier; a sold-out
/// show is *not* an error, see [`BookingOutcome`](crate::show::BookingOutcome).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimError {
    /// A configuration value is outside its allowed range. Detected before any
    /// task is spawned; nothing is partially executed.
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: i64 },

    /// A synchronization primitive could not be constructed. Fatal at
    /// construction time; no booking is ever attempted.
    #[error("failed to initialize synchronization primitives: {0}")]
    ResourceInit(String),

    /// A show id outside the pool's bounds was requested. This is a defect in
    /// the caller, not a runtime condition users can trigger.
    #[error("show id {0} is out of range")]
    ShowOutOfRange(u32),

    /// A user task panicked or was cancelled before reaching the join barrier.
    #[error("user task failed: {0}")]
    TaskFailed(String),
}
