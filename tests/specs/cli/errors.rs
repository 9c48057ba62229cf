//! Error reporting specs
//!
//! Bad input exits non-zero with a message on stderr and nothing on stdout.

use crate::prelude::*;

#[test]
fn missing_config_file_fails() {
    let temp = Project::empty();

    temp.juicer()
        .args(&["run", "--config", "nope.toml", "--duration", "10ms"])
        .fails()
        .stderr_has("failed to read config")
        .stderr_has("nope.toml")
        .stdout_eq("");
}

#[test]
fn malformed_config_fails() {
    let temp = Project::empty();
    temp.file("plant.toml", "oranges_per_bottle = \"three\"");

    temp.juicer()
        .args(&["config", "--config", "plant.toml"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn zero_bottle_size_fails() {
    let temp = Project::empty();
    temp.file("plant.toml", "oranges_per_bottle = 0");

    temp.juicer()
        .args(&["run", "--config", "plant.toml", "--duration", "10ms"])
        .fails()
        .stderr_has("oranges_per_bottle must be at least 1");
}

#[test]
fn unknown_job_in_config_fails() {
    let temp = Project::empty();
    temp.file("plant.toml", "[crew]\njuggle = 1\n");

    temp.juicer()
        .args(&["config", "--config", "plant.toml"])
        .fails()
        .stderr_has("juggle");
}

#[test]
fn zero_plants_is_rejected() {
    Project::empty()
        .juicer()
        .args(&["run", "--plants", "0"])
        .fails()
        .stderr_has("--plants");
}

#[test]
fn bad_duration_is_rejected() {
    Project::empty()
        .juicer()
        .args(&["run", "--duration", "soon"])
        .fails()
        .stderr_has("--duration");
}
