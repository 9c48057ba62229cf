// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plant configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file describes
//! the standard plant:
//!
//! ```toml
//! oranges_per_bottle = 3
//! idle = "spin"              # or idle = { backoff = "1ms" }
//!
//! [crew]
//! fetch = 1
//! peel = 3
//! squeeze = 3
//! bottle = 2
//! process = 1
//!
//! [durations]
//! fetched = "15ms"
//! peeled = "38ms"
//! squeezed = "29ms"
//! bottled = "17ms"
//! processed = "1ms"
//! ```

use crate::orange::WorkDurations;
use crate::worker::{Role, RoleError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("oranges_per_bottle must be at least 1")]
    EmptyBottle,

    #[error(transparent)]
    Role(#[from] RoleError),

    #[error("invalid crew assignment '{0}', expected JOB=COUNT")]
    Assignment(String),
}

/// What a worker does after finding its input belt empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdlePolicy {
    /// Poll again immediately
    #[default]
    Spin,
    /// Sleep before polling again
    Backoff(#[serde(with = "humantime_serde")] Duration),
}

/// Number of workers per role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Crew {
    pub fetch: usize,
    pub peel: usize,
    pub squeeze: usize,
    pub bottle: usize,
    pub process: usize,
}

impl Crew {
    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::Fetcher => self.fetch,
            Role::Peeler => self.peel,
            Role::Squeezer => self.squeeze,
            Role::Bottler => self.bottle,
            Role::Processor => self.process,
        }
    }

    pub fn with(mut self, role: Role, count: usize) -> Self {
        let slot = match role {
            Role::Fetcher => &mut self.fetch,
            Role::Peeler => &mut self.peel,
            Role::Squeezer => &mut self.squeeze,
            Role::Bottler => &mut self.bottle,
            Role::Processor => &mut self.process,
        };
        *slot = count;
        self
    }

    /// Apply a `JOB=COUNT` override such as `peel=4`
    pub fn assign(self, assignment: &str) -> Result<Self, ConfigError> {
        let (job, count) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::Assignment(assignment.to_string()))?;
        let role: Role = job.trim().parse()?;
        let count = count
            .trim()
            .parse()
            .map_err(|_| ConfigError::Assignment(assignment.to_string()))?;
        Ok(self.with(role, count))
    }

    pub fn total(&self) -> usize {
        Role::ALL.iter().map(|role| self.count(*role)).sum()
    }

    /// Roles nobody is assigned to; oranges pile up before them
    pub fn unstaffed(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.count(*role) == 0)
            .collect()
    }
}

impl Default for Crew {
    fn default() -> Self {
        Self {
            fetch: 1,
            peel: 3,
            squeeze: 3,
            bottle: 2,
            process: 1,
        }
    }
}

/// Everything needed to build a plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlantConfig {
    /// Processed oranges that make one bottle
    pub oranges_per_bottle: u64,
    pub idle: IdlePolicy,
    pub crew: Crew,
    pub durations: WorkDurations,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            oranges_per_bottle: 3,
            idle: IdlePolicy::Spin,
            crew: Crew::default(),
            durations: WorkDurations::default(),
        }
    }
}

impl PlantConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: PlantConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.oranges_per_bottle == 0 {
            return Err(ConfigError::EmptyBottle);
        }
        for role in self.crew.unstaffed() {
            tracing::warn!(%role, "no workers assigned, nothing will get past this stage");
        }
        Ok(())
    }

    pub fn with_crew(mut self, crew: Crew) -> Self {
        self.crew = crew;
        self
    }

    pub fn with_durations(mut self, durations: WorkDurations) -> Self {
        self.durations = durations;
        self
    }

    pub fn with_idle(mut self, idle: IdlePolicy) -> Self {
        self.idle = idle;
        self
    }

    pub fn with_oranges_per_bottle(mut self, oranges_per_bottle: u64) -> Self {
        self.oranges_per_bottle = oranges_per_bottle;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
