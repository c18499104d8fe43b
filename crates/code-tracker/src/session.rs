//! Admin session gate.
//!
//! A plain equality check against the configured admin password. The result is a
//! boolean flag the client keeps; nothing is persisted or issued server-side.

use crate::error::TrackerError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Client-held authentication flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub is_authenticated: bool,
}

impl AuthSession {
    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
        }
    }

    pub fn cleared() -> Self {
        Self {
            is_authenticated: false,
        }
    }
}

/// True only for a present session with the flag set.
pub fn is_authenticated(session: Option<&AuthSession>) -> bool {
    session.is_some_and(|s| s.is_authenticated)
}

/// Check a submitted password against the configured admin secret.
pub fn admin_login(
    secret: Option<&SecretString>,
    password: Option<&str>,
) -> Result<AuthSession, TrackerError> {
    let secret = secret
        .map(|s| s.expose_secret())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            warn!("Admin login attempted but no admin password is configured");
            TrackerError::Configuration("Admin password not configured".into())
        })?;

    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| TrackerError::Validation("Password is required".into()))?;

    if password == secret.as_str() {
        info!("Admin login succeeded");
        Ok(AuthSession::authenticated())
    } else {
        warn!("Admin login rejected");
        Err(TrackerError::InvalidPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.into())
    }

    #[test]
    fn test_exact_password_accepted() {
        let session = admin_login(Some(&secret("hunter2")), Some("hunter2")).unwrap();
        assert!(session.is_authenticated);
        assert!(is_authenticated(Some(&session)));
    }

    #[test]
    fn test_wrong_password_rejected() {
        for attempt in ["hunter", "Hunter2", "hunter2 ", " hunter2"] {
            assert!(matches!(
                admin_login(Some(&secret("hunter2")), Some(attempt)),
                Err(TrackerError::InvalidPassword)
            ));
        }
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        assert!(matches!(
            admin_login(None, Some("anything")),
            Err(TrackerError::Configuration(_))
        ));
        assert!(matches!(
            admin_login(None, None),
            Err(TrackerError::Configuration(_))
        ));
        assert!(matches!(
            admin_login(Some(&secret("")), Some("anything")),
            Err(TrackerError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_password_is_validation_error() {
        assert!(matches!(
            admin_login(Some(&secret("hunter2")), None),
            Err(TrackerError::Validation(_))
        ));
        assert!(matches!(
            admin_login(Some(&secret("hunter2")), Some("")),
            Err(TrackerError::Validation(_))
        ));
    }

    #[test]
    fn test_session_flags() {
        assert!(!is_authenticated(None));
        assert!(!is_authenticated(Some(&AuthSession::cleared())));
        assert!(is_authenticated(Some(&AuthSession::authenticated())));
        assert_eq!(AuthSession::default(), AuthSession::cleared());
    }

    #[test]
    fn test_session_serialization() {
        let json = serde_json::to_value(AuthSession::authenticated()).unwrap();
        assert_eq!(json, serde_json::json!({ "isAuthenticated": true }));
    }
}
