// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `juicer config` - Print the effective configuration as TOML

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    /// Plant configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override a crew size (e.g. peel=4)
    #[arg(long = "crew", value_name = "JOB=COUNT")]
    pub crew: Vec<String>,
}

pub fn handle(args: ConfigArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), &args.crew)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
