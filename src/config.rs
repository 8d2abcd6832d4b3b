//! Simulation configuration and validation.
//!
//! All inputs are validated here, before any show, gate, or task exists.
//! Raw values arrive as `i64` so that negative inputs (e.g. a `-1` from the
//! command line) reach validation instead of failing to parse.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Default cap on concurrently admitted booking attempts.
pub const DEFAULT_CONCURRENT_LIMIT: u32 = 3;

/// Validated parameters for one simulation run.
///
/// # Validation rules
/// - `users` and `shows` must be positive.
/// - `tickets_per_show` may be zero (every booking then ends sold-out) but
///   never negative.
/// - `concurrent_limit` must be positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of user workers to launch.
    pub users: u32,
    /// Initial seat count of every show.
    pub tickets_per_show: u32,
    /// Number of shows in the pool.
    pub shows: u32,
    /// Maximum number of booking attempts admitted at once.
    pub concurrent_limit: u32,
    /// Optional delay between user launches, simulating staggered arrival.
    /// `None` launches all users back to back (maximum contention).
    #[serde(default)]
    pub arrival_interval: Option<Duration>,
}

impl SimConfig {
    /// Validates the three required parameters and applies defaults for the
    /// rest.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidConfig`] naming the offending field if
    /// `users <= 0`, `shows <= 0`, or `tickets_per_show < 0`.
    pub fn new(users: i64, tickets_per_show: i64, shows: i64) -> Result<Self, SimError> {
        let users = require_positive("users", users)?;
        let shows = require_positive("shows", shows)?;
        let tickets_per_show = require_non_negative("tickets_per_show", tickets_per_show)?;
        Ok(Self {
            users,
            tickets_per_show,
            shows,
            concurrent_limit: DEFAULT_CONCURRENT_LIMIT,
            arrival_interval: None,
        })
    }

    /// Overrides the admission limit.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidConfig`] if `limit <= 0`.
    pub fn with_concurrent_limit(mut self, limit: i64) -> Result<Self, SimError> {
        self.concurrent_limit = require_positive("concurrent_limit", limit)?;
        Ok(self)
    }

    /// Sets a delay between consecutive user launches.
    pub fn with_arrival_interval(mut self, interval: Duration) -> Self {
        self.arrival_interval = Some(interval);
        self
    }
}

fn require_positive(field: &'static str, value: i64) -> Result<u32, SimError> {
    if value <= 0 {
        return Err(SimError::InvalidConfig { field, value });
    }
    u32::try_from(value).map_err(|_| SimError::InvalidConfig { field, value })
}

fn require_non_negative(field: &'static str, value: i64) -> Result<u32, SimError> {
    if value < 0 {
        return Err(SimError::InvalidConfig { field, value });
    }
    u32::try_from(value).map_err(|_| SimError::InvalidConfig { field, value })
}
