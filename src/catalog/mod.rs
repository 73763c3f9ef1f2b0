//! Action catalog configuration
//!
//! Loads and provides access to the fixed catalog of climate actions. The
//! catalog is static: defined at build/configuration time, never mutated at
//! runtime. Deployments may override the built-in catalog with a YAML file;
//! both paths go through the same validation.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::{Action, Category};

/// Root catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCatalog {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    categories: Vec<Category>,
}

impl ActionCatalog {
    /// Load from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::load_from_str(&content)
    }

    /// Load from a YAML string
    pub fn load_from_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: ActionCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
                message: e.to_string(),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find an action by id, joining across categories
    pub fn find_action(&self, action_id: &str) -> Option<&Action> {
        self.categories
            .iter()
            .flat_map(|c| c.actions.iter())
            .find(|a| a.id == action_id)
    }

    pub fn contains_action(&self, action_id: &str) -> bool {
        self.find_action(action_id).is_some()
    }

    /// Total number of actions across all categories
    pub fn action_count(&self) -> usize {
        self.categories.iter().map(|c| c.actions.len()).sum()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// All action IDs, category by category in display order
    pub fn action_ids(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.actions.iter())
            .map(|a| a.id.as_str())
    }

    /// Actions grouped by category id, the shape the actions API returns
    pub fn actions_by_category(&self) -> HashMap<String, Vec<Action>> {
        self.categories
            .iter()
            .map(|c| (c.id.clone(), c.actions.clone()))
            .collect()
    }

    /// Validate structural invariants: unique ids, ownership references,
    /// non-negative impact values
    fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        let mut action_ids = HashSet::new();

        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    id: category.id.clone(),
                });
            }

            for action in &category.actions {
                if !action_ids.insert(action.id.as_str()) {
                    return Err(CatalogError::DuplicateAction {
                        id: action.id.clone(),
                    });
                }

                if action.category_id != category.id {
                    return Err(CatalogError::CategoryMismatch {
                        action: action.id.clone(),
                        declared: action.category_id.clone(),
                        owner: category.id.clone(),
                    });
                }

                if let Some(value) = action.impact_value {
                    if value < 0.0 {
                        return Err(CatalogError::NegativeImpact {
                            action: action.id.clone(),
                            value,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for ActionCatalog {
    fn default() -> Self {
        builtin_catalog()
    }
}

fn action(
    id: &str,
    label: &str,
    impact: &str,
    impact_value: Option<f64>,
    category_id: &str,
) -> Action {
    Action {
        id: id.to_string(),
        label: label.to_string(),
        description: None,
        impact: impact.to_string(),
        impact_value,
        category_id: category_id.to_string(),
    }
}

fn category(id: &str, name: &str, icon: &str, actions: Vec<Action>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        icon: Some(icon.to_string()),
        actions,
    }
}

/// The built-in production catalog: six categories of four actions each.
///
/// Impact values are fixed annual estimates in kg CO2e. Advocacy actions
/// have qualitative impact only and carry no numeric value.
pub fn builtin_catalog() -> ActionCatalog {
    ActionCatalog {
        version: "1.0".to_string(),
        description: Some("Climate Pledge action catalog".to_string()),
        categories: vec![
            category(
                "energy",
                "Energy",
                "zap",
                vec![
                    action(
                        "energy-1",
                        "Switch to renewable energy provider",
                        "1,500 kg CO₂e/year",
                        Some(1500.0),
                        "energy",
                    ),
                    action(
                        "energy-2",
                        "Install LED light bulbs throughout home",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "energy",
                    ),
                    action(
                        "energy-3",
                        "Unplug electronics when not in use",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "energy",
                    ),
                    action(
                        "energy-4",
                        "Reduce heating by 2 degrees in winter",
                        "300 kg CO₂e/year",
                        Some(300.0),
                        "energy",
                    ),
                ],
            ),
            category(
                "transport",
                "Transportation",
                "bus",
                vec![
                    action(
                        "transport-1",
                        "Use public transportation once a week",
                        "300 kg CO₂e/year",
                        Some(300.0),
                        "transport",
                    ),
                    action(
                        "transport-2",
                        "Carpool to work/school",
                        "500 kg CO₂e/year",
                        Some(500.0),
                        "transport",
                    ),
                    action(
                        "transport-3",
                        "Maintain proper tire pressure for fuel efficiency",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "transport",
                    ),
                    action(
                        "transport-4",
                        "Walk or bike for trips under 2 miles",
                        "200 kg CO₂e/year",
                        Some(200.0),
                        "transport",
                    ),
                ],
            ),
            category(
                "food",
                "Food",
                "utensils",
                vec![
                    action(
                        "food-1",
                        "Eat plant-based meals 2 days per week",
                        "300 kg CO₂e/year",
                        Some(300.0),
                        "food",
                    ),
                    action(
                        "food-2",
                        "Reduce food waste by meal planning",
                        "150 kg CO₂e/year",
                        Some(150.0),
                        "food",
                    ),
                    action(
                        "food-3",
                        "Buy local, seasonal produce when possible",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "food",
                    ),
                    action(
                        "food-4",
                        "Compost food scraps",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "food",
                    ),
                ],
            ),
            category(
                "water",
                "Water",
                "droplet",
                vec![
                    action(
                        "water-1",
                        "Take shorter showers (under 5 minutes)",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "water",
                    ),
                    action(
                        "water-2",
                        "Fix leaky faucets and pipes",
                        "50 kg CO₂e/year",
                        Some(50.0),
                        "water",
                    ),
                    action(
                        "water-3",
                        "Install water-efficient fixtures",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "water",
                    ),
                    action(
                        "water-4",
                        "Collect rainwater for plants",
                        "50 kg CO₂e/year",
                        Some(50.0),
                        "water",
                    ),
                ],
            ),
            category(
                "consumption",
                "Consumption",
                "shopping-bag",
                vec![
                    action(
                        "consumption-1",
                        "Bring reusable bags for shopping",
                        "10 kg CO₂e/year",
                        Some(10.0),
                        "consumption",
                    ),
                    action(
                        "consumption-2",
                        "Buy second-hand items when possible",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "consumption",
                    ),
                    action(
                        "consumption-3",
                        "Repair instead of replace",
                        "100 kg CO₂e/year",
                        Some(100.0),
                        "consumption",
                    ),
                    action(
                        "consumption-4",
                        "Choose products with minimal packaging",
                        "50 kg CO₂e/year",
                        Some(50.0),
                        "consumption",
                    ),
                ],
            ),
            category(
                "advocacy",
                "Advocacy",
                "megaphone",
                vec![
                    action(
                        "advocacy-1",
                        "Talk to friends and family about climate action",
                        "Indirect impact",
                        None,
                        "advocacy",
                    ),
                    action(
                        "advocacy-2",
                        "Support climate-friendly businesses",
                        "Indirect impact",
                        None,
                        "advocacy",
                    ),
                    action(
                        "advocacy-3",
                        "Contact elected officials about climate policies",
                        "Systemic impact",
                        None,
                        "advocacy",
                    ),
                    action(
                        "advocacy-4",
                        "Share your climate journey on social media",
                        "Indirect impact",
                        None,
                        "advocacy",
                    ),
                ],
            ),
        ],
    }
}
