// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Belts and counters shared by a plant's workers
//!
//! Each belt is a queue paired with the lock every worker must hold to touch
//! it. Each counter likewise has its own lock.

use crate::lock::{Lock, LockError};
use crate::orange::{Orange, OrangeState};
use crate::queue::SharedQueue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// One of the four queues between stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Belt {
    Fetched,
    Peeled,
    Squeezed,
    Bottled,
}

impl Belt {
    pub const ALL: [Belt; 4] = [Belt::Fetched, Belt::Peeled, Belt::Squeezed, Belt::Bottled];

    pub fn name(self) -> &'static str {
        self.holds().as_str()
    }

    /// State of every orange waiting on this belt
    pub fn holds(self) -> OrangeState {
        match self {
            Belt::Fetched => OrangeState::Fetched,
            Belt::Peeled => OrangeState::Peeled,
            Belt::Squeezed => OrangeState::Squeezed,
            Belt::Bottled => OrangeState::Bottled,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Belt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A belt's queue and its lock
#[derive(Debug)]
pub(crate) struct Station {
    pub(crate) queue: SharedQueue<Orange>,
    pub(crate) lock: Lock,
}

impl Station {
    pub(crate) fn new(plant: usize, belt: Belt) -> Self {
        Self {
            queue: SharedQueue::new(belt.name()),
            lock: Lock::new(format!("plant{}.{}", plant, belt)),
        }
    }
}

/// Monotonic counter whose updates happen under its own lock
#[derive(Debug)]
pub(crate) struct Counter {
    lock: Lock,
    value: AtomicU64,
}

impl Counter {
    pub(crate) fn new(name: String) -> Self {
        Self {
            lock: Lock::new(name),
            value: AtomicU64::new(0),
        }
    }

    /// Add one, returning the new total
    pub(crate) fn increment(&self) -> Result<u64, LockError> {
        let guard = self.lock.guard();
        let total = self.value.fetch_add(1, Ordering::SeqCst) + 1;
        guard.release()?;
        Ok(total)
    }

    pub(crate) fn get(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}
