// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling
//!
//! Simulated labor blocks on [`Clock::sleep`], so tests can swap in a
//! [`FakeClock`] that returns immediately and can inject interruptions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;

/// A wait that ended before its full duration elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wait interrupted before completion")]
pub struct Interrupted;

/// A clock that provides the current time and blocking waits
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted>;
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        std::thread::sleep(duration);
        Ok(())
    }
}

/// Fake clock for testing with controllable time
///
/// `sleep` advances the fake time instead of blocking. Interruptions queued
/// with [`FakeClock::interrupt_next`] are consumed by the next sleeps, in
/// whichever thread reaches them first.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current: Arc<Mutex<Instant>>,
    pending_interrupts: Arc<AtomicUsize>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
            pending_interrupts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Make the next `sleep` call return [`Interrupted`]
    pub fn interrupt_next(&self) {
        self.pending_interrupts.fetch_add(1, Ordering::SeqCst);
    }

    /// Interruptions queued but not yet delivered
    pub fn pending_interrupts(&self) -> usize {
        self.pending_interrupts.load(Ordering::SeqCst)
    }

    fn take_interrupt(&self) -> bool {
        self.pending_interrupts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        if self.take_interrupt() {
            return Err(Interrupted);
        }
        self.advance(duration);
        // Let other workers run; fake sleeps would otherwise never yield.
        std::thread::yield_now();
        Ok(())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
