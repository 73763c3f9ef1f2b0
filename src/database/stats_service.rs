//! Community statistics
//!
//! Aggregate counters for the landing page: active pledges, registered
//! users, catalog category count, and an estimated community CO2e saving.
//! When the database cannot be reached the service degrades to fixed
//! fallback figures instead of surfacing an error.

use sqlx::PgPool;
use tracing::warn;

use crate::catalog::ActionCatalog;
use crate::models::CommunityStats;

/// Estimated kg CO2e saved per active pledge. Placeholder figure used for
/// the community total, not a measured quantity.
pub const CO2E_SAVED_PER_PLEDGE_KG: i64 = 150;

/// Fallback stats served when the database is unavailable
pub const FALLBACK_STATS: CommunityStats = CommunityStats {
    active_pledges: 1250,
    total_users: 5000,
    co2e_saved_kg: 7500,
    action_categories: 6,
};

#[derive(Clone)]
pub struct CommunityStatsService {
    pool: PgPool,
}

impl CommunityStatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Community stats, falling back field by field when queries fail.
    ///
    /// Category count comes from the static catalog, not the database.
    pub async fn get_stats(&self, catalog: &ActionCatalog) -> CommunityStats {
        let mut stats = FALLBACK_STATS.clone();
        stats.action_categories = catalog.category_count() as i64;

        match self.count_rows("pledges").await {
            Ok(count) => {
                stats.active_pledges = count;
                stats.co2e_saved_kg = count * CO2E_SAVED_PER_PLEDGE_KG;
            }
            Err(e) => warn!("Error fetching pledge count, using fallback: {}", e),
        }

        match self.count_rows("profiles").await {
            Ok(count) => stats.total_users = count,
            Err(e) => warn!("Error fetching user count, using fallback: {}", e),
        }

        stats
    }

    async fn count_rows(&self, table: &str) -> Result<i64, sqlx::Error> {
        // Table name comes from the two call sites above, never from input
        let query = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_stats_shape() {
        assert_eq!(FALLBACK_STATS.active_pledges, 1250);
        assert_eq!(FALLBACK_STATS.total_users, 5000);
        assert_eq!(FALLBACK_STATS.co2e_saved_kg, 7500);
        assert_eq!(FALLBACK_STATS.action_categories, 6);
    }
}
