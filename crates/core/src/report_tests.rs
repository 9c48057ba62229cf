// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn report(plant: usize, provided: u64, processed: u64) -> PlantReport {
    PlantReport {
        plant,
        fetched: 1,
        peeled: 2,
        squeezed: 0,
        bottled: (provided - processed - 3) as usize,
        provided,
        processed,
        bottles: processed / 3,
        waste: processed % 3 + (provided - processed),
    }
}

#[test]
fn plant_report_text_numbers_plants_from_one() {
    let text = report(0, 20, 10).to_string();

    assert_eq!(
        text,
        "Plant #1\n\
         ------------\n\
         Fetched Size: 1\n\
         Peeled Size: 2\n\
         Squeezed Size: 0\n\
         Bottled Size: 7\n\
         Processed Size: 10"
    );
}

#[test]
fn queued_sums_all_belts() {
    let r = report(0, 20, 10);
    assert_eq!(r.queued(), 10);
    assert!(r.is_conserved());

    let lost = PlantReport { provided: 21, ..r };
    assert!(!lost.is_conserved());
}

#[test]
fn summary_totals_every_plant() {
    let summary = RunSummary::from_reports(vec![report(0, 20, 10), report(1, 9, 5)]);

    assert_eq!(
        summary.totals,
        Totals {
            provided: 29,
            processed: 15,
            bottles: 4,
            waste: 1 + 10 + 2 + 4,
        }
    );
}

#[test]
fn summary_text_ends_with_totals() {
    let summary = RunSummary::from_reports(vec![report(0, 20, 10), report(1, 9, 5)]);
    let text = summary.to_string();

    assert!(text.contains("Plant #1\n"));
    assert!(text.contains("Plant #2\n"));
    assert!(text.ends_with(
        "Total provided/processed = 29/15\nCreated 4 bottles, Wasted 17 oranges"
    ));
}

#[test]
fn empty_summary_has_zero_totals() {
    let summary = RunSummary::from_reports(Vec::new());
    assert_eq!(summary.totals, Totals::default());
    assert_eq!(
        summary.to_string(),
        "Total provided/processed = 0/0\nCreated 0 bottles, Wasted 0 oranges"
    );
}

#[test]
fn summary_serializes_plants_and_totals() {
    let summary = RunSummary::from_reports(vec![report(2, 6, 3)]);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["plants"][0]["plant"], 2);
    assert_eq!(json["plants"][0]["bottled"], 0);
    assert_eq!(json["totals"]["bottles"], 1);
    assert_eq!(json["totals"]["waste"], 3);
}
