// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod config;
pub mod run;

use anyhow::{Context, Result};
use juicer_core::PlantConfig;
use std::path::Path;

/// Load the config file (or defaults) and apply `JOB=COUNT` crew overrides
pub fn load_config(path: Option<&Path>, crew: &[String]) -> Result<PlantConfig> {
    let mut config = match path {
        Some(path) => PlantConfig::load(path)?,
        None => PlantConfig::default(),
    };

    for assignment in crew {
        config.crew = config
            .crew
            .assign(assignment)
            .with_context(|| format!("bad --crew value '{}'", assignment))?;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
