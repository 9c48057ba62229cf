// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The orange-juice plant

mod belt;
mod floor;
mod state;

pub use belt::Belt;
pub(crate) use floor::Floor;
pub use state::{Plant, PlantError, WorkerFailure};
