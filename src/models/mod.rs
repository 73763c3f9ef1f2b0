//! Core data model for the pledge system
//!
//! Catalog entries (actions and categories) are static configuration; the
//! pledge selection is the only user-owned state; the impact summary is
//! derived on every read and never persisted.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single catalog-defined climate behavior a user can commit to.
///
/// `impact_value` is the estimated kg CO2e avoided per year. Actions with
/// only qualitative impact ("Indirect impact", "Systemic impact") carry
/// `None` and contribute nothing to the carbon sum, but still count toward
/// category progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Human-readable impact string shown in the UI, e.g. "1,500 kg CO₂e/year"
    pub impact: String,
    #[serde(default)]
    pub impact_value: Option<f64>,
    pub category_id: String,
}

impl Action {
    /// Whether this action carries a numeric impact estimate
    pub fn has_numeric_impact(&self) -> bool {
        self.impact_value.is_some()
    }
}

/// A thematic grouping of related actions (energy, transportation, ...).
///
/// The catalog embeds each category's actions in display order; every
/// embedded action's `category_id` must reference the owning category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// The set of action IDs a user currently commits to.
///
/// Membership is all that matters: duplicates collapse, order is not
/// preserved. IDs with no catalog match are tolerated and simply contribute
/// nothing downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PledgeSelection(HashSet<String>);

impl PledgeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, action_id: &str) -> bool {
        self.0.contains(action_id)
    }

    pub fn insert(&mut self, action_id: impl Into<String>) -> bool {
        self.0.insert(action_id.into())
    }

    pub fn remove(&mut self, action_id: &str) -> bool {
        self.0.remove(action_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Action IDs in sorted order, for stable API responses
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.0.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl<S: Into<String>> FromIterator<S> for PledgeSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Per-category completion: how many of the category's actions are selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub category_id: String,
    pub category_name: String,
    pub selected_count: usize,
    pub total_count: usize,
}

impl CategoryProgress {
    /// Completion as a percentage; an empty category reads as 0%, never a
    /// divide-by-zero.
    pub fn completion_percent(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            (self.selected_count as f64 / self.total_count as f64) * 100.0
        }
    }
}

/// Derived impact statistics for one pledge selection.
///
/// Recomputed on every read; purely a function of (catalog, selection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub carbon_reduction_kg_per_year: f64,
    pub trees_equivalent: i64,
    pub category_progress: Vec<CategoryProgress>,
    /// "Top N%" bucket from the placeholder ranking heuristic
    pub percentile_rank: u8,
}

impl ImpactSummary {
    /// Rank rendered the way the dashboard and share card show it
    pub fn rank_label(&self) -> String {
        format!("Top {}%", self.percentile_rank)
    }

    pub fn total_selected(&self) -> usize {
        self.category_progress.iter().map(|p| p.selected_count).sum()
    }

    pub fn total_actions(&self) -> usize {
        self.category_progress.iter().map(|p| p.total_count).sum()
    }
}

/// Community-wide counters shown on the landing page.
///
/// `co2e_saved_kg` is a placeholder estimate (150 kg per active pledge),
/// not a measured quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub active_pledges: i64,
    pub total_users: i64,
    pub co2e_saved_kg: i64,
    pub action_categories: i64,
}

/// A registered user's profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapses_duplicates() {
        let selection: PledgeSelection =
            ["energy-1", "energy-1", "food-2"].into_iter().collect();
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("energy-1"));
        assert!(selection.contains("food-2"));
    }

    #[test]
    fn test_selection_sorted_ids() {
        let selection: PledgeSelection = ["water-3", "energy-1"].into_iter().collect();
        assert_eq!(selection.sorted_ids(), vec!["energy-1", "water-3"]);
    }

    #[test]
    fn test_completion_percent_empty_category() {
        let progress = CategoryProgress {
            category_id: "misc".to_string(),
            category_name: "Misc".to_string(),
            selected_count: 0,
            total_count: 0,
        };
        assert_eq!(progress.completion_percent(), 0.0);
    }

    #[test]
    fn test_completion_percent() {
        let progress = CategoryProgress {
            category_id: "energy".to_string(),
            category_name: "Energy".to_string(),
            selected_count: 2,
            total_count: 4,
        };
        assert_eq!(progress.completion_percent(), 50.0);
    }

    #[test]
    fn test_rank_label() {
        let summary = ImpactSummary {
            carbon_reduction_kg_per_year: 1600.0,
            trees_equivalent: 80,
            category_progress: vec![],
            percentile_rank: 5,
        };
        assert_eq!(summary.rank_label(), "Top 5%");
    }
}
