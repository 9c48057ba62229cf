// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-shared FIFO queue
//!
//! Every operation is atomic with respect to the others on the same queue.
//! The plant still brackets each access with the queue's external [`Lock`]
//! so that a stage can hold its input across pop, process and push.
//!
//! [`Lock`]: crate::lock::Lock

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Queue errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue '{queue}' is empty")]
    Empty { queue: String },
}

/// A self-synchronizing FIFO queue
#[derive(Debug)]
pub struct SharedQueue<T> {
    name: String,
    items: Mutex<VecDeque<T>>,
}

impl<T> SharedQueue<T> {
    /// Create a new empty queue
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Mutex::new(VecDeque::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item at the tail
    pub fn push(&self, item: T) {
        self.items().push_back(item);
    }

    /// Remove and return the head item
    pub fn pop(&self) -> Result<T, QueueError> {
        self.items().pop_front().ok_or_else(|| QueueError::Empty {
            queue: self.name.clone(),
        })
    }

    /// Number of queued items; a transient observation
    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn items(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Clone> SharedQueue<T> {
    /// Copy of the current contents, head first
    pub fn snapshot(&self) -> Vec<T> {
        self.items().iter().cloned().collect()
    }
}

impl<T> Default for SharedQueue<T> {
    fn default() -> Self {
        Self::new("queue")
    }
}

impl<T: fmt::Display> fmt::Display for SharedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for item in self.items().iter() {
            write!(f, "{}, ", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
