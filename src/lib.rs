//! Climate Pledge backend
//!
//! A fixed catalog of climate actions grouped into thematic categories,
//! per-user pledge selections persisted with full-replacement semantics,
//! and a pure impact aggregator that turns a selection into carbon-impact
//! statistics, category progress, and a heuristic community rank.
//!
//! ## Architecture
//! Catalog (static config) -> Pledge Store (Postgres) -> Impact Aggregator
//! (pure function of catalog + selection) -> REST layer (web-server crate).
//! The aggregator never performs I/O; callers fetch the selection and pass
//! it in.
//!
//! ## Quick Start
//!
//! ```rust
//! use climate_pledge::catalog::builtin_catalog;
//! use climate_pledge::impact::build_impact_summary;
//! use climate_pledge::models::PledgeSelection;
//!
//! let catalog = builtin_catalog();
//! let selection: PledgeSelection = ["energy-1", "energy-2"].into_iter().collect();
//! let summary = build_impact_summary(&catalog, &selection);
//! assert_eq!(summary.carbon_reduction_kg_per_year, 1600.0);
//! assert_eq!(summary.trees_equivalent, 80);
//! ```

// Core error handling
pub mod error;

// Data model: actions, categories, selections, derived summaries
pub mod models;

// Static action catalog (built-in defaults + YAML overrides)
pub mod catalog;

// Impact aggregation (pure, no I/O)
pub mod impact;

// Social share payloads
pub mod share;

// Database integration (when enabled)
#[cfg(feature = "database")]
pub mod database;

// Public re-exports for the common call path
pub use catalog::{builtin_catalog, ActionCatalog};
pub use error::{CatalogError, PledgeError, PledgeResult, ShareError, StoreError};
pub use impact::build_impact_summary;
pub use models::{
    Action, Category, CategoryProgress, CommunityStats, ImpactSummary, PledgeSelection,
    UserProfile,
};
pub use share::{build_share_content, ShareContent};

// Database integration re-exports (when database feature is enabled)
#[cfg(feature = "database")]
pub use database::{
    CommunityStatsService, DatabaseConfig, DatabaseManager, PledgeRepository, PledgeStore,
    ProfileRepository,
};
