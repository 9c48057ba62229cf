// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use juicer_core::{PlantReport, RunSummary};

fn summary() -> RunSummary {
    RunSummary::from_reports(vec![PlantReport {
        plant: 0,
        fetched: 2,
        peeled: 1,
        squeezed: 0,
        bottled: 0,
        provided: 10,
        processed: 7,
        bottles: 2,
        waste: 4,
    }])
}

#[test]
fn text_uses_display() {
    let text = render(&summary(), OutputFormat::Text).unwrap();
    assert!(text.starts_with("Plant #1\n------------\n"));
    assert!(text.ends_with("Created 2 bottles, Wasted 4 oranges"));
}

#[test]
fn json_round_trips() {
    let json = render(&summary(), OutputFormat::Json).unwrap();
    let parsed: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary());
}
