//! Crew override specs

use crate::prelude::*;

#[test]
fn unstaffed_processor_makes_no_bottles() {
    let temp = Project::empty();
    temp.file("fast.toml", FAST_CONFIG);

    let outcome = temp
        .juicer()
        .args(&[
            "run",
            "--plants",
            "1",
            "--duration",
            "100ms",
            "--config",
            "fast.toml",
            "--crew",
            "process=0",
            "--format",
            "json",
        ])
        .passes()
        .stderr_has("no workers assigned");

    let totals = &outcome.json()["totals"];
    assert_eq!(totals["processed"], 0);
    assert_eq!(totals["bottles"], 0);
    assert_eq!(totals["waste"], totals["provided"]);
}

#[test]
fn unknown_job_override_fails() {
    Project::empty()
        .juicer()
        .args(&["run", "--crew", "juggle=2", "--duration", "10ms"])
        .fails()
        .stderr_has("invalid job 'juggle'");
}
