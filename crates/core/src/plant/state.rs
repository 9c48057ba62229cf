// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plant lifecycle and accounting

use super::belt::Belt;
use super::floor::Floor;
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, PlantConfig};
use crate::report::PlantReport;
use crate::worker::{Role, Worker, WorkerError, WorkerHandle};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// A worker that stopped with an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerFailure {
    pub worker: String,
    pub error: WorkerError,
}

impl fmt::Display for WorkerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.worker, self.error)
    }
}

#[derive(Debug, Error)]
pub enum PlantError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("plant {0} has already been started")]
    AlreadyStarted(usize),

    #[error("plant {0} has been stopped and cannot restart")]
    Stopped(usize),

    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: String,
        source: std::io::Error,
    },

    #[error("{} worker(s) failed: {}", .0.len(), join_failures(.0))]
    Workers(Vec<WorkerFailure>),
}

fn join_failures(failures: &[WorkerFailure]) -> String {
    failures
        .iter()
        .map(WorkerFailure::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// An orange-juice plant: four belts, two counters, and a crew of workers
///
/// Workers are created with the plant but only get threads on [`start`].
/// [`stop`] asks every worker to finish its current orange and leave;
/// [`await_stop`] waits until they all have.
///
/// [`start`]: Plant::start
/// [`stop`]: Plant::stop
/// [`await_stop`]: Plant::await_stop
pub struct Plant<C: Clock = SystemClock> {
    id: usize,
    oranges_per_bottle: u64,
    floor: Arc<Floor<C>>,
    crew: Vec<Worker>,
    handles: Mutex<Vec<(String, WorkerHandle)>>,
    started: AtomicBool,
    stopped: AtomicBool,
}

impl Plant<SystemClock> {
    pub fn new(id: usize, config: &PlantConfig) -> Result<Self, PlantError> {
        Self::with_clock(id, config, SystemClock)
    }
}

impl<C: Clock> Plant<C> {
    /// Build a plant whose simulated work runs on `clock`
    pub fn with_clock(id: usize, config: &PlantConfig, clock: C) -> Result<Self, PlantError> {
        config.validate()?;

        let crew = Role::ALL
            .into_iter()
            .flat_map(|role| (0..config.crew.count(role)).map(move |i| Worker::new(id, role, i)))
            .collect();

        Ok(Self {
            id,
            oranges_per_bottle: config.oranges_per_bottle,
            floor: Arc::new(Floor::new(id, config, clock)),
            crew,
            handles: Mutex::new(Vec::new()),
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn crew(&self) -> &[Worker] {
        &self.crew
    }

    /// Raise the run flag and start every worker thread
    pub fn start(&self) -> Result<(), PlantError> {
        // Held throughout so a concurrent stop() lands before or after, never between
        let mut handles = self.handles();
        if self.stopped.load(Ordering::SeqCst) {
            return Err(PlantError::Stopped(self.id));
        }
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(PlantError::AlreadyStarted(self.id));
        }

        self.floor.set_running(true);
        tracing::info!(plant = self.id, workers = self.crew.len(), "plant starting");

        for worker in &self.crew {
            match worker.spawn(Arc::clone(&self.floor)) {
                Ok(handle) => handles.push((worker.name().to_string(), handle)),
                Err(source) => {
                    tracing::error!(plant = self.id, worker = worker.name(), error = %source, "failed to spawn worker");
                    self.halt();
                    drop(handles);
                    // Spawn failure takes precedence over anything the
                    // already-running workers report on the way out
                    let _ = self.await_stop();
                    return Err(PlantError::Spawn {
                        worker: worker.name().to_string(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }

    /// Lower the run flag; workers exit after their current iteration
    pub fn stop(&self) {
        let _handles = self.handles();
        self.halt();
    }

    fn halt(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        if self.floor.is_running() {
            tracing::info!(plant = self.id, "plant stopping");
        }
        self.floor.set_running(false);
    }

    /// Block until every started worker has returned
    pub fn await_stop(&self) -> Result<(), PlantError> {
        let handles = std::mem::take(&mut *self.handles());
        let mut failures = Vec::new();

        for (worker, handle) in handles {
            match handle.join() {
                Ok(Ok(handled)) => {
                    tracing::debug!(plant = self.id, worker = %worker, handled, "worker joined");
                }
                Ok(Err(error)) => failures.push(WorkerFailure { worker, error }),
                Err(_) => failures.push(WorkerFailure {
                    worker,
                    error: WorkerError::Panicked,
                }),
            }
        }

        if failures.is_empty() {
            tracing::info!(
                plant = self.id,
                provided = self.provided(),
                processed = self.processed(),
                "plant stopped"
            );
            Ok(())
        } else {
            Err(PlantError::Workers(failures))
        }
    }

    /// Whether the run flag is up
    pub fn is_running(&self) -> bool {
        self.floor.is_running()
    }

    pub fn queue_len(&self, belt: Belt) -> usize {
        self.floor.station(belt).queue.len()
    }

    pub fn fetched_len(&self) -> usize {
        self.queue_len(Belt::Fetched)
    }

    pub fn peeled_len(&self) -> usize {
        self.queue_len(Belt::Peeled)
    }

    pub fn squeezed_len(&self) -> usize {
        self.queue_len(Belt::Squeezed)
    }

    pub fn bottled_len(&self) -> usize {
        self.queue_len(Belt::Bottled)
    }

    /// Oranges brought into the plant
    pub fn provided(&self) -> u64 {
        self.floor.provided().get()
    }

    /// Oranges that made it all the way through
    pub fn processed(&self) -> u64 {
        self.floor.processed().get()
    }

    pub fn oranges_per_bottle(&self) -> u64 {
        self.oranges_per_bottle
    }

    pub fn bottles(&self) -> u64 {
        self.bottling(self.provided(), self.processed()).0
    }

    /// Processed oranges short of a full bottle, plus every orange not processed
    pub fn waste(&self) -> u64 {
        self.bottling(self.provided(), self.processed()).1
    }

    /// Snapshot of counters and belt sizes
    pub fn report(&self) -> PlantReport {
        let provided = self.provided();
        let processed = self.processed();
        let (bottles, waste) = self.bottling(provided, processed);
        PlantReport {
            plant: self.id,
            fetched: self.fetched_len(),
            peeled: self.peeled_len(),
            squeezed: self.squeezed_len(),
            bottled: self.bottled_len(),
            provided,
            processed,
            bottles,
            waste,
        }
    }

    /// Bottles filled and oranges wasted for the given counts
    fn bottling(&self, provided: u64, processed: u64) -> (u64, u64) {
        let bottles = processed / self.oranges_per_bottle;
        let waste = processed % self.oranges_per_bottle + provided.saturating_sub(processed);
        (bottles, waste)
    }

    fn handles(&self) -> std::sync::MutexGuard<'_, Vec<(String, WorkerHandle)>> {
        self.handles.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clock> fmt::Debug for Plant<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plant")
            .field("id", &self.id)
            .field("workers", &self.crew.len())
            .field("running", &self.is_running())
            .field("provided", &self.provided())
            .field("processed", &self.processed())
            .finish()
    }
}

impl<C: Clock> Drop for Plant<C> {
    fn drop(&mut self) {
        self.stop();
        if let Err(e) = self.await_stop() {
            tracing::warn!(plant = self.id, error = %e, "plant dropped with failed workers");
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
