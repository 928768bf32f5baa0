use serde::{Deserialize, Serialize};

/// An authenticated user, as reported by the auth gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl Identity {
    /// Name for the dashboard greeting. Falls back to the email local-part
    /// when no display name was set at registration.
    pub fn greeting_name(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    /// Name for the report header. Falls back to the full email address,
    /// which is what the report surface has always shown.
    pub fn report_name(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Registration details beyond the credentials themselves
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFields {
    pub name: String,
    pub mobile: String,
}

/// A stored user profile, written once at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    /// RFC 3339 timestamp of the registration
    pub created_at: String,
}
