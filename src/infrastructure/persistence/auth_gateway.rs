use crate::domain::errors::AuthError;
use crate::domain::identity::{Identity, ProfileFields, UserProfile};
use crate::domain::ports::AuthGateway;
use crate::domain::repositories::ProfileRepository;
use crate::infrastructure::credentials::{ensure_configured, password_digest};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

fn db_err(e: sqlx::Error) -> AuthError {
    AuthError::Unreachable {
        reason: e.to_string(),
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Authentication backed by the users table. Credentials are stored as
/// keyed digests, never as plaintext.
pub struct SqliteAuthGateway {
    pool: SqlitePool,
    api_key: String,
    identity_tx: watch::Sender<Option<Identity>>,
    profiles: Arc<dyn ProfileRepository>,
}

impl SqliteAuthGateway {
    pub fn new(pool: SqlitePool, api_key: String, profiles: Arc<dyn ProfileRepository>) -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self {
            pool,
            api_key,
            identity_tx,
            profiles,
        }
    }
}

#[async_trait]
impl AuthGateway for SqliteAuthGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        ensure_configured(&self.api_key)?;

        let key = normalize_email(email);
        let row =
            sqlx::query("SELECT id, email, display_name, password_digest FROM users WHERE email = ?")
                .bind(&key)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        let Some(row) = row else {
            return Err(AuthError::InvalidCredentials);
        };

        let digest: String = row.try_get("password_digest").map_err(db_err)?;
        if digest != password_digest(&self.api_key, password) {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = Identity {
            user_id: row.try_get("id").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            display_name: row.try_get("display_name").map_err(db_err)?,
        };

        let _ = self.identity_tx.send(Some(identity.clone()));
        Ok(identity)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        profile: ProfileFields,
    ) -> Result<Identity, AuthError> {
        ensure_configured(&self.api_key)?;

        let key = normalize_email(email);
        let existing = sqlx::query("SELECT 1 FROM users WHERE email = ?")
            .bind(&key)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(AuthError::EmailTaken { email: key });
        }

        let display_name = match profile.name.trim() {
            "" => None,
            name => Some(name.to_string()),
        };
        let user_id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO users (id, email, password_digest, display_name) VALUES (?, ?, ?, ?)",
        )
        .bind(&user_id)
        .bind(&key)
        .bind(password_digest(&self.api_key, password))
        .bind(display_name.as_deref())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        let identity = Identity {
            user_id: user_id.clone(),
            email: key.clone(),
            display_name,
        };

        // The new account is signed in before the profile write settles,
        // matching how the auth backend fires its state change first.
        let _ = self.identity_tx.send(Some(identity.clone()));

        let record = UserProfile {
            user_id,
            name: profile.name,
            email: key,
            mobile: profile.mobile,
            created_at: Utc::now().to_rfc3339(),
        };
        self.profiles
            .save(&record)
            .await
            .map_err(|e| AuthError::Unreachable {
                reason: e.to_string(),
            })?;

        info!("Registered user {}", identity.email);
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let _ = self.identity_tx.send(None);
        Ok(())
    }

    fn watch_identity(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }
}
