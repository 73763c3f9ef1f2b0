//! Pledge selection persistence
//!
//! The store holds one row per (user, action) pair. Saves are
//! full-replacement: the incoming set overwrites the entire prior selection
//! in one transaction, so concurrent saves resolve last-write-wins. Partial
//! updates (toggling one action) are expected to be implemented by callers
//! as read-modify-write of the full set, not as atomic add/remove here.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::PledgeSelection;

/// Storage seam for pledge selections
#[async_trait]
pub trait PledgeStore: Send + Sync {
    /// Current selection for a user; a user with no rows yields the empty set
    async fn get_selection(&self, user_id: Uuid) -> Result<PledgeSelection, StoreError>;

    /// Replace the user's entire selection with `selection`
    async fn replace_selection(
        &self,
        user_id: Uuid,
        selection: &PledgeSelection,
    ) -> Result<(), StoreError>;
}

/// Postgres-backed pledge store
#[derive(Clone)]
pub struct PledgeRepository {
    pool: PgPool,
}

impl PledgeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PledgeStore for PledgeRepository {
    async fn get_selection(&self, user_id: Uuid) -> Result<PledgeSelection, StoreError> {
        let rows = sqlx::query(
            "SELECT action_id FROM pledges WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| row.get::<String, _>("action_id"))
            .collect())
    }

    async fn replace_selection(
        &self,
        user_id: Uuid,
        selection: &PledgeSelection,
    ) -> Result<(), StoreError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM pledges WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for action_id in selection.sorted_ids() {
            sqlx::query(
                r#"INSERT INTO pledges (user_id, action_id, created_at)
                   VALUES ($1, $2, $3)
                   ON CONFLICT (user_id, action_id) DO NOTHING"#,
            )
            .bind(user_id)
            .bind(&action_id)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
