//! Final-state aggregation: per-show and total booking statistics.

use serde::{Deserialize, Serialize};

use crate::booking::BookingRecord;
use crate::pool::ShowPool;

/// Final inventory of one show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowStatus {
    pub id: u32,
    pub initial: u32,
    pub remaining: u32,
    pub booked: u32,
}

/// The complete result of a simulation run, as plain structured data. How it
/// is rendered (table, JSON, logs) is entirely the consumer's concern.
///
/// Totals are `u64`: a single show's inventory fits in `u32`, but the sum
/// across a full-sized pool does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// One entry per show, in id order, including shows nobody targeted.
    pub shows: Vec<ShowStatus>,
    pub total_initial: u64,
    pub total_remaining: u64,
    pub total_booked: u64,
    /// `total_booked / total_initial`, or 0 when the pool opened with no
    /// seats at all.
    pub success_rate: f64,
    /// Every user's individual outcome, in launch order (user id ascending):
    /// the join barrier awaits the workers in the order they were spawned.
    pub outcomes: Vec<BookingRecord>,
}

/// Computes the report from final show states and the collected outcomes.
///
/// Pure read: mutates nothing. Must only run after every worker has been
/// joined; the per-show locks are taken for the reads, but the happens-after
/// edge that makes the values final is the join barrier, not the locks.
pub async fn summarize(pool: &ShowPool, outcomes: Vec<BookingRecord>) -> Report {
    let mut shows = Vec::with_capacity(pool.len() as usize);
    let mut total_initial = 0u64;
    let mut total_remaining = 0u64;

    for show in pool.iter() {
        let remaining = show.remaining().await;
        let initial = show.initial();
        shows.push(ShowStatus {
            id: show.id(),
            initial,
            remaining,
            booked: initial - remaining,
        });
        total_initial += u64::from(initial);
        total_remaining += u64::from(remaining);
    }

    let total_booked = total_initial - total_remaining;
    let success_rate = if total_initial == 0 {
        0.0
    } else {
        total_booked as f64 / total_initial as f64
    };

    Report {
        shows,
        total_initial,
        total_remaining,
        total_booked,
        success_rate,
        outcomes,
    }
}
