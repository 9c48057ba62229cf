// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-run reports

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counters and belt sizes of one plant at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantReport {
    pub plant: usize,
    pub fetched: usize,
    pub peeled: usize,
    pub squeezed: usize,
    pub bottled: usize,
    pub provided: u64,
    pub processed: u64,
    pub bottles: u64,
    pub waste: u64,
}

impl PlantReport {
    /// Oranges waiting on any belt
    pub fn queued(&self) -> u64 {
        (self.fetched + self.peeled + self.squeezed + self.bottled) as u64
    }

    /// Whether every provided orange is either processed or on a belt.
    /// Only meaningful once the plant has stopped.
    pub fn is_conserved(&self) -> bool {
        self.provided == self.processed + self.queued()
    }
}

impl fmt::Display for PlantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Plants are numbered from one for people
        writeln!(f, "Plant #{}", self.plant + 1)?;
        writeln!(f, "------------")?;
        writeln!(f, "Fetched Size: {}", self.fetched)?;
        writeln!(f, "Peeled Size: {}", self.peeled)?;
        writeln!(f, "Squeezed Size: {}", self.squeezed)?;
        writeln!(f, "Bottled Size: {}", self.bottled)?;
        write!(f, "Processed Size: {}", self.processed)
    }
}

/// Sums across every plant of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub provided: u64,
    pub processed: u64,
    pub bottles: u64,
    pub waste: u64,
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total provided/processed = {}/{}",
            self.provided, self.processed
        )?;
        write!(
            f,
            "Created {} bottles, Wasted {} oranges",
            self.bottles, self.waste
        )
    }
}

/// Per-plant reports and their totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub plants: Vec<PlantReport>,
    pub totals: Totals,
}

impl RunSummary {
    pub fn from_reports(plants: Vec<PlantReport>) -> Self {
        let totals = plants.iter().fold(Totals::default(), |acc, r| Totals {
            provided: acc.provided + r.provided,
            processed: acc.processed + r.processed,
            bottles: acc.bottles + r.bottles,
            waste: acc.waste + r.waste,
        });
        Self { plants, totals }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.plants {
            writeln!(f, "{}", report)?;
            writeln!(f)?;
        }
        write!(f, "{}", self.totals)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
