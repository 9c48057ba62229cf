// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker roles

use crate::orange::OrangeState;
use crate::plant::Belt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The job a worker performs for its whole life
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "fetch")]
    Fetcher,
    #[serde(rename = "peel")]
    Peeler,
    #[serde(rename = "squeeze")]
    Squeezer,
    #[serde(rename = "bottle")]
    Bottler,
    #[serde(rename = "process")]
    Processor,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("invalid job '{0}', expected one of: fetch, peel, squeeze, bottle, process")]
    Unknown(String),
}

impl Role {
    /// Every role, in pipeline order
    pub const ALL: [Role; 5] = [
        Role::Fetcher,
        Role::Peeler,
        Role::Squeezer,
        Role::Bottler,
        Role::Processor,
    ];

    /// Job name used in configuration and thread names
    pub fn job(self) -> &'static str {
        match self {
            Role::Fetcher => "fetch",
            Role::Peeler => "peel",
            Role::Squeezer => "squeeze",
            Role::Bottler => "bottle",
            Role::Processor => "process",
        }
    }

    /// Belt this role takes oranges from; fetchers make their own
    pub fn input(self) -> Option<Belt> {
        match self {
            Role::Fetcher => None,
            Role::Peeler => Some(Belt::Fetched),
            Role::Squeezer => Some(Belt::Peeled),
            Role::Bottler => Some(Belt::Squeezed),
            Role::Processor => Some(Belt::Bottled),
        }
    }

    /// Belt this role puts oranges on; processors retire them instead
    pub fn output(self) -> Option<Belt> {
        match self {
            Role::Fetcher => Some(Belt::Fetched),
            Role::Peeler => Some(Belt::Peeled),
            Role::Squeezer => Some(Belt::Squeezed),
            Role::Bottler => Some(Belt::Bottled),
            Role::Processor => None,
        }
    }

    /// State an orange is in once this role is done with it
    pub fn produces(self) -> OrangeState {
        match self {
            Role::Fetcher => OrangeState::Fetched,
            Role::Peeler => OrangeState::Peeled,
            Role::Squeezer => OrangeState::Squeezed,
            Role::Bottler => OrangeState::Bottled,
            Role::Processor => OrangeState::Processed,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.job())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.job() == s)
            .ok_or_else(|| RoleError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
