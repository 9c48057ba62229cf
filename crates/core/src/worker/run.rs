// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker thread loop
//!
//! Fetchers hold the fetched belt's lock while they make an orange and put it
//! on the belt, then count it as provided under the counter's lock.
//!
//! Every other role holds its input belt's lock from the moment it pops an
//! orange until the orange has been worked and handed to the next belt (or
//! counted as processed). Workers of one stage therefore take turns for the
//! whole processing time of each orange.

use super::role::Role;
use crate::clock::Clock;
use crate::lock::LockError;
use crate::orange::{Orange, OrangeError};
use crate::plant::{Belt, Floor};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Misuse detected inside a worker loop; the worker stops
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error(transparent)]
    Orange(#[from] OrangeError),
    #[error("worker thread panicked")]
    Panicked,
}

/// Thread handle of a started worker; yields the number of oranges it handled
pub(crate) type WorkerHandle = JoinHandle<Result<u64, WorkerError>>;

/// One member of a plant's crew
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    role: Role,
    name: String,
}

impl Worker {
    /// Create the `index`th worker of `role` in plant `plant`
    pub fn new(plant: usize, role: Role, index: usize) -> Self {
        Self {
            role,
            name: format!("plant{}[{}-{}]", plant, role, index),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Name of the worker and of its thread
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn spawn<C: Clock>(&self, floor: Arc<Floor<C>>) -> io::Result<WorkerHandle> {
        let worker = self.clone();
        thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || worker.run(&floor))
    }

    /// Work until the plant stops, finishing the current orange first
    pub(crate) fn run<C: Clock>(&self, floor: &Floor<C>) -> Result<u64, WorkerError> {
        tracing::debug!(plant = floor.plant(), worker = %self.name, role = %self.role, "worker started");

        let mut handled = 0;
        while floor.is_running() {
            match self.work_once(floor) {
                Ok(true) => handled += 1,
                Ok(false) => floor.idle(),
                Err(e) => {
                    // Misuse is fatal to the whole plant
                    tracing::error!(worker = %self.name, handled, error = %e, "worker failed, halting plant");
                    floor.set_running(false);
                    return Err(e);
                }
            }
        }

        tracing::debug!(worker = %self.name, handled, "worker stopped");
        Ok(handled)
    }

    /// One loop iteration; returns whether an orange was handled
    pub(crate) fn work_once<C: Clock>(&self, floor: &Floor<C>) -> Result<bool, WorkerError> {
        match self.role.input() {
            None => self.fetch(floor).map(|()| true),
            Some(input) => self.process(floor, input),
        }
    }

    fn fetch<C: Clock>(&self, floor: &Floor<C>) -> Result<(), WorkerError> {
        let fetched = floor.station(Belt::Fetched);
        let guard = fetched.lock.guard();
        fetched.queue.push(Orange::fetch(floor.labor()));
        guard.release()?;

        let provided = floor.provided().increment()?;
        tracing::trace!(worker = %self.name, provided, "orange fetched");
        Ok(())
    }

    fn process<C: Clock>(&self, floor: &Floor<C>, input: Belt) -> Result<bool, WorkerError> {
        let station = floor.station(input);
        let input_guard = station.lock.guard();

        // Empty is routine: let go and poll again
        let Ok(mut orange) = station.queue.pop() else {
            input_guard.release()?;
            return Ok(false);
        };

        let state = match orange.advance(floor.labor()) {
            Ok(state) => state,
            Err(e) => {
                // Put it back so every orange is still accounted for
                station.queue.push(orange);
                return Err(e.into());
            }
        };

        match self.role.output() {
            Some(belt) => {
                let output = floor.station(belt);
                let output_guard = output.lock.guard();
                output.queue.push(orange);
                output_guard.release()?;
            }
            None => {
                let processed = floor.processed().increment()?;
                if orange.is_degraded() {
                    tracing::debug!(worker = %self.name, processed, "processed orange with bad juice");
                } else {
                    tracing::trace!(worker = %self.name, processed, "orange processed");
                }
            }
        }

        input_guard.release()?;
        tracing::trace!(worker = %self.name, %state, "orange advanced");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
