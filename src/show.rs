//! A single show: one independently lockable seat counter.
//!
//! Each show owns its *own* mutex, so bookings against different shows never
//! contend with each other. The only state mutated under contention is the
//! remaining seat count, and every read-then-write of it happens inside one
//! critical section.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Terminal result of one booking attempt. `SoldOut` is a normal outcome, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOutcome {
    /// One seat was reserved.
    Booked,
    /// No seats remained at check time; nothing was mutated.
    SoldOut,
}

/// One show's seat inventory.
///
/// Invariant: `0 <= remaining <= initial` at all times. The check and the
/// decrement in [`Show::book_one`] form a single critical section; splitting
/// them across two lock acquisitions is exactly the check-then-act race the
/// per-show mutex exists to prevent.
#[derive(Debug)]
pub struct Show {
    id: u32,
    initial: u32,
    seats: Mutex<u32>,
}

impl Show {
    pub(crate) fn new(id: u32, initial: u32) -> Self {
        Self {
            id,
            initial,
            seats: Mutex::new(initial),
        }
    }

    /// Stable identifier, 1-based.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Seat count the show opened with. Never mutated after construction.
    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Attempts to reserve exactly one seat.
    ///
    /// Locks this show's mutex, checks availability, and decrements on
    /// success, all in one critical section. The section is O(1) and contains
    /// no I/O or sleeping.
    pub async fn book_one(&self) -> BookingOutcome {
        let mut seats = self.seats.lock().await;
        if *seats > 0 {
            *seats -= 1;
            BookingOutcome::Booked
        } else {
            BookingOutcome::SoldOut
        }
    }

    /// Current remaining seat count.
    ///
    /// Intended for the reporter after all workers have been joined; the lock
    /// is taken anyway so a stray mid-run call observes a consistent value.
    pub async fn remaining(&self) -> u32 {
        *self.seats.lock().await
    }
}
