use rust_decimal::Decimal;
use thiserror::Error;

/// Banner shown when appending a journal entry fails, whatever the cause
pub const SAVE_FAILED_BANNER: &str = "Failed to save trade. Check your database permissions.";

/// Errors raised by the authentication gateway
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for {email}")]
    EmailTaken { email: String },

    #[error("Authentication service rejected the request: permission denied")]
    PermissionDenied,

    #[error("Authentication backend is misconfigured: {reason}")]
    Misconfigured { reason: String },

    #[error("Authentication service unreachable: {reason}")]
    Unreachable { reason: String },
}

impl AuthError {
    /// Human-readable banner for the session view. Credential problems keep
    /// their own message; infrastructure problems collapse to the two
    /// recognized configuration banners.
    pub fn banner(&self) -> String {
        match self {
            AuthError::InvalidCredentials | AuthError::EmailTaken { .. } => self.to_string(),
            AuthError::PermissionDenied => {
                "Access denied by the authentication service.".to_string()
            }
            AuthError::Misconfigured { .. } => {
                "Invalid backend API key. Update your deployment credentials.".to_string()
            }
            AuthError::Unreachable { .. } => {
                "Failed to connect to authentication service. Check your backend API key."
                    .to_string()
            }
        }
    }
}

/// Errors raised by the record store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Record store rejected the request: permission denied")]
    PermissionDenied,

    #[error("Record store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    /// Banner for a broken subscription. Permission problems point at the
    /// store's access rules, everything else at the backend configuration.
    pub fn banner(&self) -> String {
        match self {
            StoreError::PermissionDenied => {
                "Access denied. Ensure the record store rules allow authenticated users."
                    .to_string()
            }
            StoreError::Unavailable { .. } => {
                "Database connection issue. Verify your backend configuration.".to_string()
            }
        }
    }
}

/// Violations of the entry form's required-field constraints
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Instrument must not be empty")]
    MissingInstrument,

    #[error("Lot size must be positive, got {size}")]
    NonPositiveSize { size: Decimal },

    #[error("Confidence rating must be between 1 and 5, got {rating}")]
    RatingOutOfRange { rating: u8 },
}
