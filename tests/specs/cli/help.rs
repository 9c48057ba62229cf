//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    Project::empty()
        .juicer()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("config");
}

#[test]
fn run_help_shows_defaults() {
    Project::empty()
        .juicer()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--plants")
        .stdout_has("[default: 3]")
        .stdout_has("[default: 5s]");
}

#[test]
fn version_prints_package_version() {
    Project::empty()
        .juicer()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}
