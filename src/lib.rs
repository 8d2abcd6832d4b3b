//! # Box Office
//!
//! > **A concurrent ticket-booking simulator.**
//!
//! A fixed pool of shows, each holding a finite seat count, is contended for
//! by many concurrent users. Every user makes exactly one booking attempt
//! against a show of its choosing. The crate guarantees that no show's seat
//! count ever goes negative and that successful bookings never exceed a
//! show's opening capacity, under arbitrary task interleavings.
//!
//! ## 🏗️ Design Philosophy
//!
//! The interesting part is the synchronization design, built from exactly two
//! primitives:
//!
//! - **Fine-grained per-show mutexes**: each [`Show`](show::Show) guards its
//!   own seat counter with its own lock, so bookings against *different*
//!   shows never contend with each other. There is no global lock over the
//!   pool.
//! - **A system-wide admission gate**: a counting semaphore
//!   ([`AdmissionGate`](gate::AdmissionGate)) bounds how many booking
//!   attempts may be in flight at once, independent of which shows they
//!   target.
//!
//! The booking protocol ([`booking::book`]) composes them in a strict order:
//! gate, then show lock, then check-and-decrement, then unlock, then release.
//! The gate is the only outer lock in the hierarchy and each user touches one
//! show at most, so no deadlock cycle can form.
//!
//! ## 🗺️ Module Tour
//!
//! - [`config`]: validated simulation parameters ([`SimConfig`](config::SimConfig)).
//! - [`error`]: the fatal-error taxonomy ([`SimError`](error::SimError)).
//! - [`show`]: one lockable seat counter; [`pool`]: the fixed collection of them.
//! - [`gate`]: the semaphore admission gate with in-flight bookkeeping.
//! - [`booking`]: the booking protocol and its outcome records.
//! - [`selection`]: uniform or scripted target choice for workers.
//! - [`user`]: the one-shot user worker task.
//! - [`report`]: final per-show and total statistics.
//! - [`sim`]: the orchestrator (build, launch, join barrier, report).
//! - [`telemetry`]: tracing subscriber setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # 10 users, 5 seats per show, 3 shows, with info logs
//! RUST_LOG=info cargo run -- 10 5 3
//! ```
//!
//! From code:
//!
//! ```no_run
//! # async fn demo() -> Result<(), box_office::error::SimError> {
//! let config = box_office::config::SimConfig::new(10, 5, 3)?;
//! let report = box_office::sim::run(config).await?;
//! assert_eq!(report.total_booked + report.total_remaining, report.total_initial);
//! # Ok(())
//! # }
//! ```

pub mod booking;
pub mod config;
pub mod error;
pub mod gate;
pub mod pool;
pub mod report;
pub mod selection;
pub mod show;
pub mod sim;
pub mod telemetry;
pub mod user;
