//! Run report specs
//!
//! `juicer run` prints one block per plant and then the totals.

use crate::prelude::*;

#[test]
fn text_report_has_a_block_per_plant_and_totals() {
    let temp = Project::empty();
    temp.file("fast.toml", FAST_CONFIG);

    temp.juicer()
        .args(&[
            "run",
            "--plants",
            "2",
            "--duration",
            "200ms",
            "--config",
            "fast.toml",
        ])
        .passes()
        .stdout_has("Plant #1\n------------\nFetched Size: ")
        .stdout_has("Plant #2\n")
        .stdout_lacks("Plant #3")
        .stdout_has("Processed Size: ")
        .stdout_has("Total provided/processed = ")
        .stdout_has(" bottles, Wasted ");
}

#[test]
fn default_run_uses_three_plants() {
    Project::empty()
        .juicer()
        .args(&["run", "--duration", "50ms"])
        .passes()
        .stdout_has("Plant #3\n")
        .stdout_lacks("Plant #4");
}

#[test]
fn json_report_is_consistent() {
    let temp = Project::empty();
    temp.file("fast.toml", FAST_CONFIG);

    let outcome = temp
        .juicer()
        .args(&[
            "run",
            "--duration",
            "200ms",
            "--config",
            "fast.toml",
            "--format",
            "json",
        ])
        .passes();
    let json = outcome.json();

    let plants = json["plants"].as_array().unwrap();
    assert_eq!(plants.len(), 3);

    let mut provided = 0;
    let mut processed = 0;
    for plant in plants {
        let queued: u64 = ["fetched", "peeled", "squeezed", "bottled"]
            .iter()
            .map(|belt| plant[*belt].as_u64().unwrap())
            .sum();
        let p = plant["provided"].as_u64().unwrap();
        let q = plant["processed"].as_u64().unwrap();
        assert_eq!(p, q + queued, "oranges lost in {}", plant);
        assert_eq!(plant["bottles"].as_u64().unwrap(), q / 3);
        assert_eq!(plant["waste"].as_u64().unwrap(), q % 3 + (p - q));
        provided += p;
        processed += q;
    }

    assert!(provided > 0);
    assert_eq!(json["totals"]["provided"].as_u64().unwrap(), provided);
    assert_eq!(json["totals"]["processed"].as_u64().unwrap(), processed);
}

#[test]
fn logs_stay_off_stdout() {
    let temp = Project::empty();
    temp.file("fast.toml", FAST_CONFIG);

    let outcome = temp
        .juicer()
        .args(&[
            "--verbose",
            "run",
            "--plants",
            "1",
            "--duration",
            "50ms",
            "--config",
            "fast.toml",
            "--format",
            "json",
        ])
        .passes()
        .stderr_has("worker started");

    assert_eq!(outcome.json()["plants"].as_array().unwrap().len(), 1);
}
