//! User profile persistence
//!
//! Profiles mirror the managed-auth user records: id, display name, email.
//! Credential handling stays with the external auth provider; this
//! repository only stores the profile row created alongside signup.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::UserProfile;

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a profile record; name conflicts with an existing id update
    /// the stored name (signup retries are idempotent)
    pub async fn create_profile(
        &self,
        user_id: Uuid,
        name: &str,
        email: Option<&str>,
    ) -> Result<UserProfile, StoreError> {
        let row = sqlx::query(
            r#"INSERT INTO profiles (id, name, email, created_at)
               VALUES ($1, $2, $3, $4)
               ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
               RETURNING id, name, email, created_at"#,
        )
        .bind(user_id)
        .bind(name)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(profile_from_row(&row))
    }

    /// Get a profile by user id
    pub async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, email, created_at FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(profile_from_row))
    }
}

fn profile_from_row(row: &sqlx::postgres::PgRow) -> UserProfile {
    UserProfile {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    }
}
