// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `juicer run` - Run plants for a fixed time and report the results

use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use clap::builder::RangedU64ValueParser;
use clap::Args;
use juicer_core::{Plant, PlantConfig, RunSummary};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// How often the run wakes to check for Ctrl-C
const INTERRUPT_POLL: Duration = Duration::from_millis(20);

#[derive(Args)]
pub struct RunArgs {
    /// Number of plants to run side by side
    #[arg(short, long, default_value_t = 3, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub plants: usize,

    /// How long the plants run (e.g. 5s, 500ms)
    #[arg(short, long, default_value = "5s", value_parser = humantime::parse_duration)]
    pub duration: Duration,

    /// Plant configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override a crew size (e.g. peel=4)
    #[arg(long = "crew", value_name = "JOB=COUNT")]
    pub crew: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn handle(args: RunArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), &args.crew)?;

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nStopping plants...");
        r.store(false, Ordering::SeqCst);
    })?;

    let summary = run_plants(&config, args.plants, args.duration, &running)?;
    output::print(&summary, args.format)
}

/// Start `count` plants, let them work for `duration` (or until `running`
/// drops), then stop them all and collect their reports
pub fn run_plants(
    config: &PlantConfig,
    count: usize,
    duration: Duration,
    running: &AtomicBool,
) -> Result<RunSummary> {
    let plants = (0..count)
        .map(|id| Plant::new(id, config))
        .collect::<Result<Vec<_>, _>>()?;

    for plant in &plants {
        // Plants already started are stopped and joined on drop
        plant.start()?;
    }
    tracing::info!(plants = count, duration = %humantime::format_duration(duration), "plants running");

    let deadline = Instant::now() + duration;
    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(INTERRUPT_POLL.min(deadline - now));
    }

    for plant in &plants {
        plant.stop();
    }

    let mut failed = Vec::new();
    for plant in &plants {
        if let Err(e) = plant.await_stop() {
            tracing::error!(plant = plant.id(), error = %e, "plant failed");
            failed.push(format!("plant {}: {}", plant.id(), e));
        }
    }
    if !failed.is_empty() {
        bail!("{}", failed.join("\n"));
    }

    Ok(RunSummary::from_reports(
        plants.iter().map(Plant::report).collect(),
    ))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
