use crate::domain::identity::UserProfile;
use crate::domain::repositories::ProfileRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::info;

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn save(&self, profile: &UserProfile) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, name, email, mobile, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                mobile = excluded.mobile
            "#,
        )
        .bind(&profile.user_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.mobile)
        .bind(&profile.created_at)
        .execute(&self.pool)
        .await
        .context("Failed to save profile")?;

        info!("Persisted profile for {}", profile.user_id);
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let row = sqlx::query(
            "SELECT user_id, name, email, mobile, created_at FROM profiles WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load profile")?;

        if let Some(row) = row {
            Ok(Some(UserProfile {
                user_id: row.try_get("user_id")?,
                name: row.try_get("name")?,
                email: row.try_get("email")?,
                mobile: row.try_get::<Option<String>, _>("mobile")?.unwrap_or_default(),
                created_at: row.try_get("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }
}
