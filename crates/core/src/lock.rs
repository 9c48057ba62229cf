// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary lock for exclusive access to shared plant resources
//!
//! The lock guards no data of its own. Callers bracket access to a queue or
//! counter with `acquire`/`release`, or hold a [`LockGuard`] for the length
//! of a critical section. Contended acquires block on a condition variable.

use std::sync::{Condvar, Mutex, MutexGuard};
use thiserror::Error;

/// Lock state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    /// Lock is available
    Free,
    /// Lock is held by some thread
    Held,
}

/// Lock misuse
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LockError {
    #[error("attempted to release lock '{name}' which is not held")]
    NotHeld { name: String },
}

/// A non-reentrant binary lock with blocking acquire
///
/// Ownership is not tracked: any thread may release a held lock. Acquiring a
/// lock the current thread already holds blocks forever.
#[derive(Debug)]
pub struct Lock {
    name: String,
    state: Mutex<LockState>,
    released: Condvar,
}

impl Lock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(LockState::Free),
            released: Condvar::new(),
        }
    }

    /// Name identifying this lock in logs and errors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current state; stale as soon as it is returned
    pub fn state(&self) -> LockState {
        *self.lock_state()
    }

    pub fn is_held(&self) -> bool {
        self.state() == LockState::Held
    }

    /// Block until the lock is free, then take it
    pub fn acquire(&self) {
        let state = self.lock_state();
        let mut state = self
            .released
            .wait_while(state, |s| *s == LockState::Held)
            .unwrap_or_else(|e| e.into_inner());
        *state = LockState::Held;
    }

    /// Release the lock and wake every waiting thread
    pub fn release(&self) -> Result<(), LockError> {
        let mut state = self.lock_state();
        if *state == LockState::Free {
            return Err(LockError::NotHeld {
                name: self.name.clone(),
            });
        }
        *state = LockState::Free;
        drop(state);
        self.released.notify_all();
        Ok(())
    }

    /// Acquire the lock for the lifetime of the returned guard
    pub fn guard(&self) -> LockGuard<'_> {
        self.acquire();
        LockGuard { lock: self }
    }

    fn lock_state(&self) -> MutexGuard<'_, LockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Lock {
    fn default() -> Self {
        Self::new("lock")
    }
}

/// Scoped critical section over a [`Lock`]
///
/// Releases on drop. Use [`LockGuard::release`] to observe a failed release
/// instead of having it logged.
#[must_use = "the lock is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LockGuard<'a> {
    lock: &'a Lock,
}

impl LockGuard<'_> {
    /// End the critical section now
    pub fn release(self) -> Result<(), LockError> {
        let lock = self.lock;
        std::mem::forget(self);
        lock.release()
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.lock.release() {
            tracing::error!(lock = %self.lock.name, error = %e, "lock released out from under its guard");
        }
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
