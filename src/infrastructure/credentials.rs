use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::errors::AuthError;

/// Marker left in deployment templates. A key still carrying it was never
/// filled in.
const PLACEHOLDER_MARKER: &str = "YOUR_API_KEY";

/// Reject blank or template backend API keys before any credential work.
pub fn ensure_configured(api_key: &str) -> Result<(), AuthError> {
    if api_key.trim().is_empty() {
        return Err(AuthError::Misconfigured {
            reason: "backend API key is blank".to_string(),
        });
    }
    if api_key.contains(PLACEHOLDER_MARKER) {
        return Err(AuthError::Misconfigured {
            reason: "backend API key is still the deployment placeholder".to_string(),
        });
    }
    Ok(())
}

/// Password digest keyed by the backend API key, so digests from one
/// deployment are useless against another.
pub fn password_digest(api_key: &str, password: &str) -> String {
    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(api_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(password.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = password_digest("key-1", "hunter2");
        let b = password_digest("key-1", "hunter2");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex-encoded SHA-256
    }

    #[test]
    fn test_digest_depends_on_key_and_password() {
        let base = password_digest("key-1", "hunter2");
        assert_ne!(base, password_digest("key-2", "hunter2"));
        assert_ne!(base, password_digest("key-1", "hunter3"));
    }

    #[test]
    fn test_blank_and_placeholder_keys_are_rejected() {
        assert!(matches!(
            ensure_configured(""),
            Err(AuthError::Misconfigured { .. })
        ));
        assert!(matches!(
            ensure_configured("   "),
            Err(AuthError::Misconfigured { .. })
        ));
        assert!(matches!(
            ensure_configured("YOUR_API_KEY_HERE"),
            Err(AuthError::Misconfigured { .. })
        ));
        assert!(ensure_configured("dev-local-key").is_ok());
    }
}
