//! Config printing specs

use crate::prelude::*;

#[test]
fn defaults_are_printed_as_toml() {
    Project::empty()
        .juicer()
        .args(&["config"])
        .passes()
        .stdout_has("oranges_per_bottle = 3")
        .stdout_has("idle = \"spin\"")
        .stdout_has("[crew]")
        .stdout_has("peel = 3")
        .stdout_has("[durations]")
        .stdout_has("peeled = \"38ms\"");
}

#[test]
fn file_values_and_overrides_are_merged() {
    let temp = Project::empty();
    temp.file("plant.toml", "oranges_per_bottle = 5\n[crew]\nsqueeze = 6\n");

    temp.juicer()
        .args(&["config", "--config", "plant.toml", "--crew", "bottle=1"])
        .passes()
        .stdout_has("oranges_per_bottle = 5")
        .stdout_has("squeeze = 6")
        .stdout_has("bottle = 1")
        .stdout_has("fetch = 1");
}

#[test]
fn printed_config_loads_back() {
    let temp = Project::empty();
    let printed = temp
        .juicer()
        .args(&["config", "--crew", "peel=7"])
        .passes()
        .stdout;
    temp.file("again.toml", &printed);

    temp.juicer()
        .args(&["config", "--config", "again.toml"])
        .passes()
        .stdout_eq(&printed);
}
