//! End-to-end aggregation scenarios through the public API

use climate_pledge::{build_impact_summary, builtin_catalog, PledgeSelection};

#[test]
fn energy_selection_full_pipeline() {
    let catalog = builtin_catalog();
    let selection: PledgeSelection = ["energy-1", "energy-2"].into_iter().collect();

    let summary = build_impact_summary(&catalog, &selection);

    assert_eq!(summary.carbon_reduction_kg_per_year, 1600.0);
    assert_eq!(summary.trees_equivalent, 80);
    assert_eq!(summary.percentile_rank, 5);
    assert_eq!(summary.rank_label(), "Top 5%");
    assert_eq!(summary.total_selected(), 2);
    assert_eq!(summary.total_actions(), 24);

    let energy = summary
        .category_progress
        .iter()
        .find(|p| p.category_id == "energy")
        .expect("energy category present");
    assert_eq!((energy.selected_count, energy.total_count), (2, 4));
    assert_eq!(energy.completion_percent(), 50.0);
}

#[test]
fn new_user_sees_zero_summary() {
    let catalog = builtin_catalog();
    let summary = build_impact_summary(&catalog, &PledgeSelection::new());

    assert_eq!(summary.carbon_reduction_kg_per_year, 0.0);
    assert_eq!(summary.trees_equivalent, 0);
    assert_eq!(summary.percentile_rank, 60);
    assert_eq!(summary.category_progress.len(), 6);
    for progress in &summary.category_progress {
        assert_eq!(progress.selected_count, 0);
        assert_eq!(progress.total_count, 4);
    }
}

#[test]
fn mixed_selection_across_categories() {
    let catalog = builtin_catalog();
    let selection: PledgeSelection = [
        "energy-4",      // 300
        "transport-2",   // 500
        "food-2",        // 150
        "water-2",       // 50
        "consumption-1", // 10
        "advocacy-3",    // qualitative
        "not-a-real-id", // ignored
    ]
    .into_iter()
    .collect();

    let summary = build_impact_summary(&catalog, &selection);

    assert_eq!(summary.carbon_reduction_kg_per_year, 1010.0);
    assert_eq!(summary.trees_equivalent, 51); // 1010/20 = 50.5, rounds up
    assert_eq!(summary.percentile_rank, 5);
    assert_eq!(summary.total_selected(), 6);
}

#[test]
fn summary_is_stable_under_serialization() {
    let catalog = builtin_catalog();
    let selection: PledgeSelection = ["food-1", "food-4"].into_iter().collect();

    let summary = build_impact_summary(&catalog, &selection);
    let json = serde_json::to_string(&summary).unwrap();
    let decoded: climate_pledge::ImpactSummary = serde_json::from_str(&json).unwrap();

    assert_eq!(summary, decoded);
}
