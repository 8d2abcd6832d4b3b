//! The booking operation: the one protocol every user performs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SimError;
use crate::gate::AdmissionGate;
use crate::pool::ShowPool;
use crate::show::BookingOutcome;

/// The outcome of one user's single booking attempt. Read-only after
/// creation; the reporter consumes these after the join barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub user_id: u32,
    pub show_id: u32,
    pub outcome: BookingOutcome,
}

/// Performs one booking attempt against `show_id` on behalf of `user_id`.
///
/// The protocol, in order:
/// 1. Acquire an admission slot from the gate.
/// 2. Lock the target show's mutex.
/// 3. Check-and-decrement the seat count (one critical section).
/// 4. Unlock the show.
/// 5. Release the admission slot.
///
/// Steps 4 and 5 are enforced by drop order: the show's mutex guard lives
/// inside [`Show::book_one`](crate::show::Show::book_one) and is released
/// before `book_one` returns, while the gate permit is dropped last, at the
/// end of this function. The gate is therefore strictly outside every show
/// mutex, and since a user touches at most one show, no lock-ordering cycle
/// can form.
///
/// No step is retried; a sold-out show is a normal terminal outcome.
///
/// # Errors
/// Returns [`SimError::ShowOutOfRange`] if `show_id` is not in the pool. That
/// is a caller defect: workers only book targets drawn from the pool's range.
pub async fn book(
    gate: &AdmissionGate,
    pool: &ShowPool,
    user_id: u32,
    show_id: u32,
) -> Result<BookingRecord, SimError> {
    let show = pool.get(show_id)?;

    let _slot = gate.acquire().await;
    debug!(user_id, show_id, in_flight = gate.in_flight(), "admitted");

    let outcome = show.book_one().await;
    debug!(user_id, show_id, ?outcome, "attempt finished");

    Ok(BookingRecord {
        user_id,
        show_id,
        outcome,
    })
}
