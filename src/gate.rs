//! The admission gate: a counting semaphore bounding how many booking
//! attempts are in flight at once, system-wide.
//!
//! The gate is pure admission control. It transfers no data and knows nothing
//! about shows; it only caps concurrency. It is the single "outer" lock in the
//! hierarchy: always acquired before any show mutex and released only after
//! that mutex is already released (the RAII drop order in
//! [`book`](crate::booking::book) enforces this).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{Semaphore, SemaphorePermit};

use crate::error::SimError;

/// Counting semaphore with admission bookkeeping.
///
/// Invariant: outstanding permits never exceed `capacity`, so
/// [`high_water`](AdmissionGate::high_water) is bounded by `capacity` for the
/// lifetime of the gate.
#[derive(Debug)]
pub struct AdmissionGate {
    sem: Semaphore,
    capacity: u32,
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
}

/// RAII admission slot. Dropping it returns the permit and lets at most one
/// waiting worker proceed; ordering among waiters is unspecified.
#[derive(Debug)]
pub struct GatePermit<'a> {
    gate: &'a AdmissionGate,
    _permit: SemaphorePermit<'a>,
}

impl AdmissionGate {
    /// Creates a gate admitting at most `capacity` workers at once.
    ///
    /// # Errors
    /// - [`SimError::InvalidConfig`] if `capacity` is zero.
    /// - [`SimError::ResourceInit`] if `capacity` exceeds what the underlying
    ///   semaphore can represent.
    pub fn new(capacity: u32) -> Result<Arc<Self>, SimError> {
        if capacity == 0 {
            return Err(SimError::InvalidConfig {
                field: "concurrent_limit",
                value: 0,
            });
        }
        if capacity as usize > Semaphore::MAX_PERMITS {
            return Err(SimError::ResourceInit(format!(
                "semaphore capacity {capacity} exceeds maximum of {}",
                Semaphore::MAX_PERMITS
            )));
        }
        Ok(Arc::new(Self {
            sem: Semaphore::new(capacity as usize),
            capacity,
            in_flight: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
        }))
    }

    /// Blocks until an admission slot is free, then claims it.
    ///
    /// There is no timeout and no cancellation path; a caller that leaks the
    /// returned permit forever starves the system. That is a fatal misuse,
    /// not a recoverable condition.
    pub async fn acquire(&self) -> GatePermit<'_> {
        // The semaphore is owned by the gate and never closed, so acquisition
        // can only ever succeed.
        let permit = self
            .sem
            .acquire()
            .await
            .expect("admission gate semaphore is never closed");
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now, Ordering::SeqCst);
        GatePermit {
            gate: self,
            _permit: permit,
        }
    }

    /// Configured admission capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of workers currently past `acquire` and not yet released.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Peak number of simultaneously admitted workers observed so far.
    pub fn high_water(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(
            AdmissionGate::new(0).unwrap_err(),
            SimError::InvalidConfig { field: "concurrent_limit", value: 0 }
        );
    }

    #[tokio::test]
    async fn tracks_in_flight_and_high_water() {
        let gate = AdmissionGate::new(2).unwrap();
        assert_eq!(gate.in_flight(), 0);

        let first = gate.acquire().await;
        let second = gate.acquire().await;
        assert_eq!(gate.in_flight(), 2);
        assert_eq!(gate.high_water(), 2);

        drop(first);
        assert_eq!(gate.in_flight(), 1);
        drop(second);
        assert_eq!(gate.in_flight(), 0);
        // The peak is monotone.
        assert_eq!(gate.high_water(), 2);
    }

    #[tokio::test]
    async fn release_unblocks_a_waiter() {
        let gate = AdmissionGate::new(1).unwrap();
        let held = gate.acquire().await;

        let contender = {
            let gate = Arc::clone(&gate);
            tokio::spawn(async move {
                let _permit = gate.acquire().await;
            })
        };

        // The contender cannot be admitted while the permit is held.
        tokio::task::yield_now().await;
        assert!(!contender.is_finished());

        drop(held);
        contender.await.unwrap();
        assert_eq!(gate.in_flight(), 0);
    }
}
