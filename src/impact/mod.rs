//! Impact aggregation
//!
//! Pure, deterministic transformation from (action catalog, pledge selection)
//! to an impact summary: carbon-reduction total, tree-planting equivalent,
//! per-category completion, and a percentile-rank bucket. No I/O, no mutation
//! of inputs; all data-shape issues (unknown IDs, qualitative actions, empty
//! inputs) are handled defensively, never as errors.

use crate::catalog::ActionCatalog;
use crate::models::{CategoryProgress, ImpactSummary, PledgeSelection};

/// Annual CO2e absorption of a single tree, in kg. Used to convert a
/// carbon-reduction figure into a trees-planted equivalent.
pub const KG_CO2E_PER_TREE_YEAR: f64 = 20.0;

/// Placeholder: average per-user carbon reduction in kg CO2e/year.
/// Simulated figure, not derived from population data.
pub const AVERAGE_USER_IMPACT_KG: f64 = 185.0;

/// Placeholder: size of the pledge community shown on the dashboard.
/// Simulated figure, not a live count.
pub const COMMUNITY_USER_COUNT: u64 = 12_453;

/// Per-category completion counts, in catalog display order.
///
/// Every category yields an entry, selected or not; a category with no
/// actions yields `(0, 0)`.
pub fn compute_category_progress(
    catalog: &ActionCatalog,
    selection: &PledgeSelection,
) -> Vec<CategoryProgress> {
    catalog
        .categories()
        .iter()
        .map(|category| {
            let selected_count = category
                .actions
                .iter()
                .filter(|action| selection.contains(&action.id))
                .count();

            CategoryProgress {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                selected_count,
                total_count: category.actions.len(),
            }
        })
        .collect()
}

/// Total estimated carbon reduction in kg CO2e/year for a selection.
///
/// Sums `impact_value` over selected actions that carry one. Selection
/// entries with no catalog match contribute exactly 0, as do qualitative
/// actions. Iterating the catalog (rather than the selection) counts each
/// action at most once even if the underlying storage held duplicates.
pub fn compute_carbon_reduction(catalog: &ActionCatalog, selection: &PledgeSelection) -> f64 {
    catalog
        .categories()
        .iter()
        .flat_map(|category| category.actions.iter())
        .filter(|action| selection.contains(&action.id))
        .filter_map(|action| action.impact_value)
        .sum()
}

/// Tree-planting equivalent of a carbon-reduction figure.
///
/// `round(kg / 20)`, rounding half away from zero (`f64::round`); since the
/// input is non-negative this is round-half-up.
pub fn compute_trees_equivalent(carbon_reduction_kg_per_year: f64) -> i64 {
    (carbon_reduction_kg_per_year / KG_CO2E_PER_TREE_YEAR).round() as i64
}

/// "Top N%" rank bucket for a carbon-reduction figure.
///
/// Step function over fixed thresholds, highest first, exclusive boundaries.
/// This simulates a population distribution; it is a placeholder heuristic,
/// not a statistically computed percentile, and the breakpoints are part of
/// the observable contract.
pub fn compute_percentile_rank(carbon_reduction_kg_per_year: f64) -> u8 {
    let reduction = carbon_reduction_kg_per_year;
    if reduction > 500.0 {
        5
    } else if reduction > 300.0 {
        15
    } else if reduction > 200.0 {
        25
    } else if reduction > 100.0 {
        40
    } else {
        60
    }
}

/// Build the full impact summary for one selection.
///
/// The single entry point consumers should call; composes the per-category
/// progress, carbon sum, trees equivalent, and rank bucket. An empty
/// selection yields a well-defined zero summary.
pub fn build_impact_summary(
    catalog: &ActionCatalog,
    selection: &PledgeSelection,
) -> ImpactSummary {
    let carbon_reduction_kg_per_year = compute_carbon_reduction(catalog, selection);

    ImpactSummary {
        carbon_reduction_kg_per_year,
        trees_equivalent: compute_trees_equivalent(carbon_reduction_kg_per_year),
        category_progress: compute_category_progress(catalog, selection),
        percentile_rank: compute_percentile_rank(carbon_reduction_kg_per_year),
    }
}
