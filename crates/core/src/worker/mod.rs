// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plant workers: roles and the per-thread work loop

mod role;
mod run;

pub use role::{Role, RoleError};
pub use run::{Worker, WorkerError};
pub(crate) use run::WorkerHandle;
