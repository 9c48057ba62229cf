// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State shared between a plant and its worker threads

use super::belt::{Belt, Counter, Station};
use crate::clock::Clock;
use crate::config::{IdlePolicy, PlantConfig};
use crate::orange::Labor;
use std::sync::atomic::{AtomicBool, Ordering};

/// Belts, counters and the run flag every worker of one plant shares
#[derive(Debug)]
pub(crate) struct Floor<C: Clock> {
    plant: usize,
    labor: Labor<C>,
    idle: IdlePolicy,
    running: AtomicBool,
    stations: [Station; 4],
    provided: Counter,
    processed: Counter,
}

impl<C: Clock> Floor<C> {
    pub(crate) fn new(plant: usize, config: &PlantConfig, clock: C) -> Self {
        Self {
            plant,
            labor: Labor::new(config.durations, clock),
            idle: config.idle,
            running: AtomicBool::new(false),
            stations: Belt::ALL.map(|belt| Station::new(plant, belt)),
            provided: Counter::new(format!("plant{}.provided", plant)),
            processed: Counter::new(format!("plant{}.processed", plant)),
        }
    }

    pub(crate) fn plant(&self) -> usize {
        self.plant
    }

    pub(crate) fn labor(&self) -> &Labor<C> {
        &self.labor
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }

    pub(crate) fn station(&self, belt: Belt) -> &Station {
        &self.stations[belt.index()]
    }

    pub(crate) fn provided(&self) -> &Counter {
        &self.provided
    }

    pub(crate) fn processed(&self) -> &Counter {
        &self.processed
    }

    /// Called after a worker found its input belt empty
    pub(crate) fn idle(&self) {
        match self.idle {
            IdlePolicy::Spin => std::hint::spin_loop(),
            IdlePolicy::Backoff(pause) => {
                // An interrupted pause only means polling again sooner
                let _ = self.labor.clock().sleep(pause);
            }
        }
    }
}
