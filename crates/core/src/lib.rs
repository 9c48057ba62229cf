// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! juicer-core: a simulated orange-juice plant
//!
//! This crate provides:
//! - A condition-variable `Lock` and a `SharedQueue` with internal locking
//! - The `Orange` state machine and the timed work behind each step
//! - Worker threads, one per crew member, moving oranges between belts
//! - `Plant`, which owns the belts and counters and runs the crew

pub mod clock;
pub mod config;
pub mod lock;
pub mod orange;
pub mod plant;
pub mod queue;
pub mod report;
pub mod worker;

pub use clock::{Clock, FakeClock, Interrupted, SystemClock};
pub use config::{ConfigError, Crew, IdlePolicy, PlantConfig};
pub use lock::{Lock, LockError, LockGuard, LockState};
pub use orange::{Labor, Orange, OrangeError, OrangeState, WorkDurations, WorkOutcome};
pub use plant::{Belt, Plant, PlantError, WorkerFailure};
pub use queue::{QueueError, SharedQueue};
pub use report::{PlantReport, RunSummary, Totals};
pub use worker::{Role, RoleError, Worker, WorkerError};
