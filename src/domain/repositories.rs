//! Repository abstractions for profile persistence.
//!
//! Profiles are written once at registration and read back for display.
//! The in-memory implementation backs tests and demo runs; the SQLite
//! implementation persists across restarts.

use crate::domain::identity::UserProfile;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for persisting and retrieving user profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Save a profile, replacing any existing row for the same user
    async fn save(&self, profile: &UserProfile) -> Result<()>;

    /// Find the profile for a user id
    async fn find_by_user(&self, user_id: &str) -> Result<Option<UserProfile>>;
}
