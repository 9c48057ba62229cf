// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orange state machine
//!
//! An orange moves forward one state per [`Orange::advance`] call, spending
//! the current state's work duration before it moves. Work is simulated by
//! blocking on the plant's [`Clock`].

use crate::clock::{Clock, Interrupted};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Processing state of an orange, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrangeState {
    Fetched,
    Peeled,
    Squeezed,
    Bottled,
    Processed,
}

impl OrangeState {
    /// Every state, first to last
    pub const ALL: [OrangeState; 5] = [
        OrangeState::Fetched,
        OrangeState::Peeled,
        OrangeState::Squeezed,
        OrangeState::Bottled,
        OrangeState::Processed,
    ];

    /// The state that follows this one, if any
    pub fn next(self) -> Option<OrangeState> {
        match self {
            OrangeState::Fetched => Some(OrangeState::Peeled),
            OrangeState::Peeled => Some(OrangeState::Squeezed),
            OrangeState::Squeezed => Some(OrangeState::Bottled),
            OrangeState::Bottled => Some(OrangeState::Processed),
            OrangeState::Processed => None,
        }
    }

    pub fn is_final(self) -> bool {
        self == OrangeState::Processed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrangeState::Fetched => "fetched",
            OrangeState::Peeled => "peeled",
            OrangeState::Squeezed => "squeezed",
            OrangeState::Bottled => "bottled",
            OrangeState::Processed => "processed",
        }
    }
}

impl fmt::Display for OrangeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time spent in each state before the orange can move on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkDurations {
    #[serde(with = "humantime_serde")]
    pub fetched: Duration,
    #[serde(with = "humantime_serde")]
    pub peeled: Duration,
    #[serde(with = "humantime_serde")]
    pub squeezed: Duration,
    #[serde(with = "humantime_serde")]
    pub bottled: Duration,
    #[serde(with = "humantime_serde")]
    pub processed: Duration,
}

impl WorkDurations {
    /// The same duration for every state
    pub fn uniform(duration: Duration) -> Self {
        Self {
            fetched: duration,
            peeled: duration,
            squeezed: duration,
            bottled: duration,
            processed: duration,
        }
    }

    pub fn for_state(&self, state: OrangeState) -> Duration {
        match state {
            OrangeState::Fetched => self.fetched,
            OrangeState::Peeled => self.peeled,
            OrangeState::Squeezed => self.squeezed,
            OrangeState::Bottled => self.bottled,
            OrangeState::Processed => self.processed,
        }
    }
}

impl Default for WorkDurations {
    fn default() -> Self {
        Self {
            fetched: Duration::from_millis(15),
            peeled: Duration::from_millis(38),
            squeezed: Duration::from_millis(29),
            bottled: Duration::from_millis(17),
            processed: Duration::from_millis(1),
        }
    }
}

/// How a unit of simulated work ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOutcome {
    /// The full duration elapsed
    Complete,
    /// The wait was cut short; the step still counts
    Degraded,
}

/// Performs the simulated work for each state
#[derive(Debug, Clone)]
pub struct Labor<C: Clock> {
    durations: WorkDurations,
    clock: C,
}

impl<C: Clock> Labor<C> {
    pub fn new(durations: WorkDurations, clock: C) -> Self {
        Self { durations, clock }
    }

    pub fn durations(&self) -> &WorkDurations {
        &self.durations
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Block for the given state's work duration
    pub fn perform(&self, state: OrangeState) -> WorkOutcome {
        match self.clock.sleep(self.durations.for_state(state)) {
            Ok(()) => WorkOutcome::Complete,
            Err(Interrupted) => {
                tracing::warn!(%state, "incomplete orange processing, juice may be bad");
                WorkOutcome::Degraded
            }
        }
    }
}

/// Orange misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrangeError {
    #[error("orange has already been processed")]
    AlreadyProcessed,
}

/// An orange moving through the plant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orange {
    state: OrangeState,
    degraded: bool,
}

impl Orange {
    /// Fetch a new orange, doing the fetch work before returning it
    pub fn fetch<C: Clock>(labor: &Labor<C>) -> Self {
        let outcome = labor.perform(OrangeState::Fetched);
        Self {
            state: OrangeState::Fetched,
            degraded: outcome == WorkOutcome::Degraded,
        }
    }

    pub fn state(&self) -> OrangeState {
        self.state
    }

    pub fn is_processed(&self) -> bool {
        self.state.is_final()
    }

    /// Whether any step so far was cut short; its juice may be bad
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Do the current state's work, then move to the next state
    ///
    /// Returns the new state. A processed orange is rejected before any
    /// work is done.
    pub fn advance<C: Clock>(&mut self, labor: &Labor<C>) -> Result<OrangeState, OrangeError> {
        let next = self.state.next().ok_or(OrangeError::AlreadyProcessed)?;
        if labor.perform(self.state) == WorkOutcome::Degraded {
            self.degraded = true;
        }
        self.state = next;
        Ok(next)
    }
}

impl fmt::Display for Orange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "orange({})", self.state)
    }
}

#[cfg(test)]
#[path = "orange_tests.rs"]
mod tests;
